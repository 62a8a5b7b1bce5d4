pub mod authentication;
pub mod invoice_mutation;
