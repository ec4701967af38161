pub mod view;

pub use view::CheckoutPage;
