mod event_flow_tests;
mod session_fs_tests;
