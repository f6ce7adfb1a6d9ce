//! Integration tests driving the cap-release binary

mod helpers;
mod test_release;
mod test_sync;
