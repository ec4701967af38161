pub mod icons;
pub mod modal_frame;
pub mod theme;
