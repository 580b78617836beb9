use prost::Message;

/// root message of an encoded network.
#[derive(Clone, PartialEq, Message)]
pub struct NetworkMessage {
    /// identifier of the city or feed this network was built from.
    #[prost(string, optional, tag = "1")]
    pub city_id: Option<String>,

    /// canonical stops, in stop index order.
    #[prost(message, repeated, tag = "2")]
    pub stops: Vec<StopMessage>,

    /// lines that carry at least one service interval.
    #[prost(message, repeated, tag = "3")]
    pub lines: Vec<LineMessage>,
}

#[derive(Clone, PartialEq, Message)]
pub struct StopMessage {
    #[prost(double, optional, tag = "1")]
    pub latitude: Option<f64>,

    #[prost(double, optional, tag = "2")]
    pub longitude: Option<f64>,

    #[prost(message, repeated, tag = "3")]
    pub travel_options: Vec<TravelOptionMessage>,

    /// only written when extra info was requested.
    #[prost(string, optional, tag = "4")]
    pub name: Option<String>,
}

/// an edge leaving a stop. ride edges populate `line`, `travel_time` and
/// `stay_time`; walk edges populate `walk_distance`. clients tell the two
/// apart by the presence of `line`.
#[derive(Clone, PartialEq, Message)]
pub struct TravelOptionMessage {
    /// index of the target stop in [`NetworkMessage::stops`].
    #[prost(int32, optional, tag = "1")]
    pub stop: Option<i32>,

    #[prost(int32, optional, tag = "2")]
    pub travel_time: Option<i32>,

    #[prost(int32, optional, tag = "3")]
    pub stay_time: Option<i32>,

    /// the `line_id` of the line serving this edge.
    #[prost(string, optional, tag = "4")]
    pub line: Option<String>,

    /// meters.
    #[prost(int32, optional, tag = "5")]
    pub walk_distance: Option<i32>,
}

#[derive(Clone, PartialEq, Message)]
pub struct LineMessage {
    #[prost(string, optional, tag = "1")]
    pub line_id: Option<String>,

    #[prost(message, repeated, tag = "2")]
    pub line_times: Vec<LineTimeMessage>,

    #[prost(string, optional, tag = "3")]
    pub name: Option<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct LineTimeMessage {
    /// seconds between departures.
    #[prost(int32, optional, tag = "1")]
    pub interval: Option<i32>,

    /// first hour of the service window.
    #[prost(int32, optional, tag = "2")]
    pub start: Option<i32>,

    /// last hour of the service window.
    #[prost(int32, optional, tag = "3")]
    pub stop: Option<i32>,

    /// weekday bitmask, Monday in the lowest bit.
    #[prost(int32, optional, tag = "4")]
    pub weekday: Option<i32>,
}
