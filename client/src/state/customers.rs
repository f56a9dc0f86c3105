//! Customers page state.

#[cfg(test)]
#[path = "customers_test.rs"]
mod customers_test;

use shop::{Customer, search_customers};

#[derive(Clone, Debug, PartialEq)]
pub struct CustomersState {
    pub customers: Vec<Customer>,
    pub loading: bool,
    pub search: String,
    pub show_new_customer_modal: bool,
}

impl Default for CustomersState {
    fn default() -> Self {
        Self {
            customers: Vec::new(),
            loading: true,
            search: String::new(),
            show_new_customer_modal: false,
        }
    }
}

impl CustomersState {
    pub fn finish_loading(&mut self, customers: Vec<Customer>) {
        self.customers = customers;
        self.loading = false;
    }

    #[must_use]
    pub fn visible(&self) -> Vec<Customer> {
        search_customers(&self.customers, &self.search)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Header count; always the full list, never the filtered one.
    #[must_use]
    pub fn total(&self) -> usize {
        self.customers.len()
    }

    #[must_use]
    pub fn shows_empty_state(&self) -> bool {
        !self.loading && self.visible().is_empty()
    }
}
