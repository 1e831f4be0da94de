pub mod booking_form;
pub mod session_detail;
pub mod sessions_list;
pub mod upcoming_sessions;

pub use booking_form::BookingForm;
pub use session_detail::SessionDetail;
pub use sessions_list::SessionsList;
pub use upcoming_sessions::UpcomingSessions;
