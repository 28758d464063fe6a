pub mod pages;
pub mod routes {
    pub mod admin;
    pub mod sale;
    pub mod views;
}
pub mod services {
    pub mod intake;
    pub mod report;
}
