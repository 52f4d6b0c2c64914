pub mod filter_form;
pub mod package_card;
pub mod results_list;
