fn main() {
    session_booking_ui::run();
}
