pub mod image_upload;
pub mod items_list;
pub mod report_form;
