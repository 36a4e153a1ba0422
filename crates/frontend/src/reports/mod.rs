pub mod r101_payment;
pub mod r102_customer_wise;
pub mod r103_product_wise;
pub mod store;
