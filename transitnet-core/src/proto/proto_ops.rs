use super::{
    LineMessage, LineTimeMessage, NetworkMessage, ProtoError, StopMessage, TravelOptionMessage,
};
use crate::model::{Line, LineTime, Network, Stop, TravelOption};
use prost::Message;

/// encodes a finished network into its binary wire form.
pub fn encode_network(network: &Network) -> Vec<u8> {
    NetworkMessage::from(network).encode_to_vec()
}

pub fn decode_network(bytes: &[u8]) -> Result<NetworkMessage, ProtoError> {
    let message = NetworkMessage::decode(bytes)?;
    Ok(message)
}

impl From<&Network> for NetworkMessage {
    fn from(network: &Network) -> Self {
        let stops = network
            .stops
            .iter()
            .map(|stop| stop_message(stop, &network.lines))
            .collect();
        let lines = network.lines.iter().map(LineMessage::from).collect();
        NetworkMessage {
            city_id: Some(network.city_id.clone()),
            stops,
            lines,
        }
    }
}

impl From<&Line> for LineMessage {
    fn from(line: &Line) -> Self {
        LineMessage {
            line_id: Some(line.line_id.clone()),
            line_times: line.line_times.iter().map(LineTimeMessage::from).collect(),
            name: line.name.clone(),
        }
    }
}

impl From<&LineTime> for LineTimeMessage {
    fn from(line_time: &LineTime) -> Self {
        LineTimeMessage {
            interval: Some(saturate(line_time.interval)),
            start: Some(saturate(line_time.start_hour)),
            stop: Some(saturate(line_time.end_hour)),
            weekday: Some(i32::from(line_time.weekdays.bits())),
        }
    }
}

/// ride edges reference their line by index in memory but by `line_id` on the
/// wire, so the line table is needed to encode a stop.
fn stop_message(stop: &Stop, lines: &[Line]) -> StopMessage {
    let travel_options = stop
        .travel_options
        .iter()
        .map(|option| match option {
            TravelOption::Ride {
                target,
                line,
                travel_time,
                stay_time,
            } => TravelOptionMessage {
                stop: Some(saturate(target.0)),
                travel_time: Some(*travel_time),
                stay_time: Some(*stay_time),
                line: lines.get(line.0).map(|l| l.line_id.clone()),
                walk_distance: None,
            },
            TravelOption::Walk { target, distance } => TravelOptionMessage {
                stop: Some(saturate(target.0)),
                travel_time: None,
                stay_time: None,
                line: None,
                walk_distance: Some(saturate(*distance)),
            },
        })
        .collect();
    StopMessage {
        latitude: Some(stop.latitude),
        longitude: Some(stop.longitude),
        travel_options,
        name: stop.name.clone(),
    }
}

fn saturate<T: TryInto<i32>>(value: T) -> i32 {
    value.try_into().unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LineIndex, StopIndex, WeekdayMask};
    use geo::Point;

    fn mock_network() -> Network {
        let mut origin = Stop::new(Point::new(-104.99, 39.74), Some(String::from("Union (1)")));
        origin.travel_options.push(TravelOption::Ride {
            target: StopIndex(1),
            line: LineIndex(0),
            travel_time: 120,
            stay_time: 30,
        });
        origin.travel_options.push(TravelOption::Walk {
            target: StopIndex(1),
            distance: 212,
        });
        let destination = Stop::new(Point::new(-104.98, 39.74), None);
        let line_times = vec![LineTime::new(WeekdayMask::MONDAY, 6, 3, 600)];
        Network {
            city_id: String::from("denver"),
            stops: vec![origin, destination],
            lines: vec![Line::new("t1", "r1", None, line_times)],
        }
    }

    #[test]
    fn test_edge_kinds_populate_disjoint_fields() {
        let bytes = encode_network(&mock_network());
        let decoded = decode_network(&bytes).expect("encoded network should decode");

        assert_eq!(decoded.city_id.as_deref(), Some("denver"));
        assert_eq!(decoded.stops.len(), 2);
        let options = &decoded.stops[0].travel_options;
        assert_eq!(options.len(), 2);

        let ride = &options[0];
        assert_eq!(ride.stop, Some(1));
        assert_eq!(ride.line.as_deref(), Some("t1|r1"));
        assert_eq!(ride.travel_time, Some(120));
        assert_eq!(ride.stay_time, Some(30));
        assert_eq!(ride.walk_distance, None);

        let walk = &options[1];
        assert_eq!(walk.stop, Some(1));
        assert_eq!(walk.line, None);
        assert_eq!(walk.travel_time, None);
        assert_eq!(walk.walk_distance, Some(212));
    }

    #[test]
    fn test_line_time_window_fields() {
        let decoded =
            decode_network(&encode_network(&mock_network())).expect("should decode");
        let line_time = &decoded.lines[0].line_times[0];
        assert_eq!(line_time.weekday, Some(1));
        assert_eq!(line_time.start, Some(6));
        assert_eq!(line_time.stop, Some(9));
        assert_eq!(line_time.interval, Some(600));
        assert_eq!(decoded.stops[1].name, None);
        assert_eq!(decoded.stops[0].name.as_deref(), Some("Union (1)"));
    }

    #[test]
    fn test_garbage_fails_to_decode() {
        let result = decode_network(&[0xff, 0xff, 0xff]);
        assert!(result.is_err());
    }
}
