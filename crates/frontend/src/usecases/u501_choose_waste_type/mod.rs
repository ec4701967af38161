pub mod view;

pub use view::WasteTypePage;
