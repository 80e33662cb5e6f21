mod bulk_actions;
mod delete_modal;
mod list_header;
mod notice_banner;
mod pagination;
mod row_menu;
mod task_form;
mod task_modal;
mod task_row;
mod task_table;

pub use bulk_actions::BulkActions;
pub use delete_modal::DeleteModal;
pub use list_header::ListHeader;
pub use notice_banner::NoticeBanner;
pub use pagination::Pagination;
pub use row_menu::RowMenu;
pub use task_form::TaskFormFields;
pub use task_modal::TaskModal;
pub use task_row::TaskRow;
pub use task_table::TaskTable;
