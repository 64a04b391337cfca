use crate::domain::entities::LocalMoment;

pub trait Clock: Send + Sync {
    fn now_local(&self) -> LocalMoment;
}
