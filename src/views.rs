//! Server-side rendering of the agenda page.
//!
//! One page: the add form, the pending table (sortable headers), and the
//! completed table. Every action is an inline POST form; each mutation
//! reloads the page via redirect.

use crate::db::DbMeeting;

const PAGE_STYLE: &str = "\
body { font-family: system-ui; max-width: 64rem; margin: 2rem auto; padding: 0 1rem; }\n\
table { border-collapse: collapse; width: 100%; margin-bottom: 2rem; }\n\
th, td { border: 1px solid #ccc; padding: 0.4rem 0.6rem; text-align: left; }\n\
th a { text-decoration: none; }\n\
.add-form input { margin: 0 0.3rem 0.5rem 0; }\n\
.actions form { display: inline; }\n\
.empty { color: #666; }";

/// Replace the HTML-significant characters. All user-supplied text goes
/// through this before being spliced into markup.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the full agenda page.
pub fn render_index(pending: &[DbMeeting], completed: &[DbMeeting]) -> String {
    let mut page = String::with_capacity(4096);
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str("<title>Meeting agenda</title>\n");
    page.push_str(&format!("<style>\n{PAGE_STYLE}\n</style>\n"));
    page.push_str("</head>\n<body>\n<h1>Meeting agenda</h1>\n");

    page.push_str(&add_form());

    page.push_str("<h2>Pending</h2>\n");
    if pending.is_empty() {
        page.push_str("<p class=\"empty\">No pending meetings.</p>\n");
    } else {
        page.push_str(&meetings_table(pending, true));
    }

    page.push_str("<h2>Completed</h2>\n");
    if completed.is_empty() {
        page.push_str("<p class=\"empty\">No completed meetings.</p>\n");
    } else {
        page.push_str(&meetings_table(completed, false));
    }

    page.push_str("</body>\n</html>\n");
    page
}

fn add_form() -> String {
    "<form method=\"post\" action=\"/add\" class=\"add-form\">\n\
     <input name=\"title\" placeholder=\"Title\" required>\n\
     <input name=\"date\" type=\"date\" required>\n\
     <input name=\"time\" type=\"time\" required>\n\
     <input name=\"location\" placeholder=\"Location or platform\" required>\n\
     <input name=\"link\" placeholder=\"Link (optional)\">\n\
     <input name=\"participants\" placeholder=\"Participants\" required>\n\
     <input name=\"owner\" placeholder=\"Owner\" required>\n\
     <button>Add meeting</button>\n\
     </form>\n"
        .to_string()
}

/// Table of meetings. Pending rows get sortable headers and a complete
/// button; completed rows only a delete button.
fn meetings_table(meetings: &[DbMeeting], pending: bool) -> String {
    let mut table = String::from("<table>\n<tr>");
    if pending {
        table.push_str(
            "<th><a href=\"/?sort=title\">Title</a></th>\
             <th><a href=\"/?sort=date\">Date</a></th>\
             <th><a href=\"/?sort=time\">Time</a></th>\
             <th>Location</th><th>Link</th>\
             <th><a href=\"/?sort=participants\">Participants</a></th>\
             <th><a href=\"/?sort=owner\">Owner</a></th><th></th>",
        );
    } else {
        table.push_str(
            "<th>Title</th><th>Date</th><th>Time</th><th>Location</th>\
             <th>Link</th><th>Participants</th><th>Owner</th><th></th>",
        );
    }
    table.push_str("</tr>\n");

    for meeting in meetings {
        table.push_str(&meeting_row(meeting, pending));
    }

    table.push_str("</table>\n");
    table
}

fn meeting_row(meeting: &DbMeeting, pending: bool) -> String {
    let link_cell = if meeting.link.is_empty() {
        String::new()
    } else {
        format!("<a href=\"{}\">Join</a>", escape_html(&meeting.link))
    };

    let mut actions = String::new();
    if pending {
        actions.push_str(&format!(
            "<form method=\"post\" action=\"/complete/{}\"><button>Done</button></form>",
            meeting.id
        ));
    }
    actions.push_str(&format!(
        "<form method=\"post\" action=\"/delete/{}\"><button>Delete</button></form>",
        meeting.id
    ));

    format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
         <td>{}</td><td>{}</td><td class=\"actions\">{}</td></tr>\n",
        escape_html(&meeting.title),
        escape_html(&meeting.date),
        escape_html(&meeting.time),
        escape_html(&meeting.location),
        link_cell,
        escape_html(&meeting.participants),
        escape_html(&meeting.owner),
        actions,
    )
}
