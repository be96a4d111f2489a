pub mod register_clock_event;
