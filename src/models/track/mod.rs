pub mod contact_form;
pub mod track_request;
