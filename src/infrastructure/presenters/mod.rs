pub mod format;
pub mod json;
pub mod plain;

use crate::domain::ports::presenter::ResultPresenter;

/// Pick a presenter by output flag.
pub fn presenter_for(json: bool) -> Box<dyn ResultPresenter> {
    if json {
        Box::new(json::JsonPresenter)
    } else {
        Box::new(plain::PlainPresenter)
    }
}
