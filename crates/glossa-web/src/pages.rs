mod login;
mod term_form;
mod term_list;

pub use login::LoginPage;
pub use term_form::TermFormPage;
pub use term_list::TermListPage;
