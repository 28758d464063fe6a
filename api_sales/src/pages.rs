//! Plain-string page markup. HTML rendering is a replaceable collaborator of
//! this system, so there is deliberately no template engine here.

use db::models::{job::Job, sale::Sale};

use crate::services::report::SalesReport;

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{title}</title></head>\n<body>\n\
         <nav><a href=\"/\">Home</a> <a href=\"/logout\">Log out</a></nav>\n\
         {body}\n</body>\n</html>\n"
    )
}

fn price_cell(price: Option<f64>) -> String {
    price.map(|p| format!("{p:.2}")).unwrap_or_else(|| "-".to_string())
}

fn sale_rows(sales: &[Sale]) -> String {
    sales
        .iter()
        .map(|s| {
            format!(
                "<tr><td>{}</td><td>{} {}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                s.description,
                s.customer_first,
                s.customer_last,
                s.payment_method,
                price_cell(s.price),
                s.timestamp.format("%Y-%m-%d %H:%M"),
            )
        })
        .collect()
}

pub fn dashboard(sales: &[Sale]) -> String {
    let body = format!(
        "<h1>Your sales</h1>\n<p><a href=\"/sale/new\">Log a sale</a> \
         <a href=\"/calendar\">Calendar</a> <a href=\"/performance\">Performance</a></p>\n\
         <table>\n<tr><th>Description</th><th>Customer</th><th>Payment</th>\
         <th>Price</th><th>Logged</th></tr>\n{}</table>\n",
        sale_rows(sales)
    );
    layout("Dashboard", &body)
}

pub fn calendar(jobs: &[Job]) -> String {
    let rows: String = jobs
        .iter()
        .map(|j| format!("<li>{} on {}</li>\n", j.title, j.scheduled_for))
        .collect();
    let body = format!("<h1>Next 7 days</h1>\n<ul>\n{rows}</ul>\n");
    layout("Calendar", &body)
}

pub fn performance(report: &SalesReport) -> String {
    let body = format!(
        "<h1>Performance</h1>\n\
         <p>Total: {:.2}</p>\n<p>Sales: {}</p>\n<p>Average: {:.2}</p>\n",
        report.total, report.count, report.average
    );
    layout("Performance", &body)
}

pub fn admin_dashboard(sales: &[Sale], report: &SalesReport) -> String {
    let body = format!(
        "<h1>All sales</h1>\n\
         <p>Grand total: {:.2} across {} sales</p>\n\
         <table>\n<tr><th>Description</th><th>Customer</th><th>Payment</th>\
         <th>Price</th><th>Logged</th></tr>\n{}</table>\n",
        report.total,
        report.count,
        sale_rows(sales)
    );
    layout("Admin", &body)
}

pub fn sale_form() -> String {
    let body = "<h1>Log a sale</h1>\n\
        <form method=\"post\" action=\"/sale/new\" enctype=\"multipart/form-data\">\n\
        <label>Description <textarea name=\"description\"></textarea></label>\n\
        <label>Address <input type=\"text\" name=\"address\"></label>\n\
        <label>Zip code <input type=\"text\" name=\"zip_code\"></label>\n\
        <label>Customer first name <input type=\"text\" name=\"customer_first\"></label>\n\
        <label>Customer last name <input type=\"text\" name=\"customer_last\"></label>\n\
        <label>Phone <input type=\"text\" name=\"phone\"></label>\n\
        <label>Payment method <input type=\"text\" name=\"payment_method\"></label>\n\
        <label>Price <input type=\"text\" name=\"price\"></label>\n\
        <label>Before photo <input type=\"file\" name=\"before_image\"></label>\n\
        <label>After photo <input type=\"file\" name=\"after_image\"></label>\n\
        <label>Proof photo <input type=\"file\" name=\"proof_image\"></label>\n\
        <button type=\"submit\">Save</button>\n\
        </form>\n";
    layout("New sale", body)
}
