//! HTML rendering for the form and result pages.
//!
//! Pure functions of their inputs so pages can be tested without an HTTP harness.
//! All user-supplied text passes through `html_escape` before it reaches the page.

use crate::recommendation::resolver::Career;

const PAGE_STYLE: &str = "body{font-family:system-ui,sans-serif;max-width:40rem;margin:3rem auto;padding:0 1rem}\
input[type=text]{width:100%;padding:.5rem;font-size:1rem}\
button{margin-top:1rem;padding:.5rem 1.5rem;font-size:1rem}\
.career{font-size:1.75rem;font-weight:600}";

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <style>{PAGE_STYLE}</style>\n\
         </head>\n\
         <body>\n\
         {body}\n\
         </body>\n\
         </html>\n"
    )
}

/// GET / — the skills submission form.
pub fn render_index() -> String {
    layout(
        "Career Guidance",
        "<h1>Career Guidance</h1>\n\
         <form method=\"post\" action=\"/recommend\">\n\
         <label for=\"skills\">List your skills</label>\n\
         <input type=\"text\" id=\"skills\" name=\"skills\" placeholder=\"e.g. Python, SQL, Figma\" required>\n\
         <button type=\"submit\">Get recommendation</button>\n\
         </form>",
    )
}

/// POST /recommend — the result page for one submission.
pub fn render_dashboard(skills: &str, career: Career) -> String {
    let skills = html_escape::encode_text(skills);
    let body = format!(
        "<h1>Your Recommendation</h1>\n\
         <p>Based on your skills: <em>{skills}</em></p>\n\
         <p class=\"career\">{career}</p>\n\
         <p><a href=\"/\">Try again</a></p>"
    );
    layout("Your Recommendation", &body)
}
