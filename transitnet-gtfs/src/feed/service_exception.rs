use chrono::NaiveDate;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExceptionKind {
    Added,
    Removed,
}

/// a row of calendar_dates.txt: service added or removed on one date.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceException {
    pub date: NaiveDate,
    pub kind: ExceptionKind,
}

impl ServiceException {
    pub fn added(date: NaiveDate) -> ServiceException {
        ServiceException {
            date,
            kind: ExceptionKind::Added,
        }
    }

    pub fn removed(date: NaiveDate) -> ServiceException {
        ServiceException {
            date,
            kind: ExceptionKind::Removed,
        }
    }
}
