mod clist;
mod notifications;

pub use clist::{ClistContestApi, ContestQuery, IContestProvider};
pub use notifications::*;
