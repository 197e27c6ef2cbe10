mod feeding_calendar;
pub use feeding_calendar::*;

mod month;
pub use month::*;
