pub mod u501_choose_waste_type;
pub mod u502_checkout;
