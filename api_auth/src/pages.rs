/// Login form markup. Rendering proper is an out-of-scope collaborator, so
/// pages are plain strings with no template engine behind them.
pub fn login_page(flash: Option<&str>) -> String {
    let flash_block = flash
        .map(|msg| format!("<p class=\"flash\">{msg}</p>\n"))
        .unwrap_or_default();
    format!(
        "<!DOCTYPE html>\n\
         <html>\n<head><title>Log in</title></head>\n<body>\n\
         <h1>Log in</h1>\n\
         {flash_block}\
         <form method=\"post\" action=\"/login\">\n\
         <label>Username <input type=\"text\" name=\"username\"></label>\n\
         <label>Password <input type=\"password\" name=\"password\"></label>\n\
         <button type=\"submit\">Log in</button>\n\
         </form>\n\
         </body>\n</html>\n"
    )
}
