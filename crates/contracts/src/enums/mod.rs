pub mod sort_order;
pub mod theme_mode;
pub mod waste_type;
