mod employee_filters;
mod employee_form_modal;
mod employee_table;

pub use employee_filters::EmployeeFiltersBar;
pub use employee_form_modal::EmployeeFormModal;
pub use employee_table::EmployeeTable;
