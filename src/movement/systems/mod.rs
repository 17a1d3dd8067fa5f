//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod cursor;
pub(crate) mod input;
pub(crate) mod locomotion;
pub(crate) mod look;

pub(crate) use collisions::detect_ground;
pub(crate) use cursor::{capture_cursor, toggle_cursor_capture};
pub(crate) use input::read_input;
pub(crate) use locomotion::apply_locomotion;
pub(crate) use look::apply_look;
