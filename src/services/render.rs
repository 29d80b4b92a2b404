use std::fmt::Write;

use crate::models::BookingRequest;
use crate::services::view::{page_path, AppointmentView};

const PAGE_HEAD: &str = "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n<title>Book an appointment</title>\n</head>\n<body>\n";
const PAGE_TAIL: &str = "</body>\n</html>\n";

/// Page shell with nothing in it, used while no profile resolves.
pub fn render_empty_page() -> String {
    format!("{PAGE_HEAD}<main id=\"appointment\"></main>\n{PAGE_TAIL}")
}

pub fn render_page(view: &AppointmentView) -> String {
    let mut html = String::with_capacity(8 * 1024);
    html.push_str(PAGE_HEAD);
    html.push_str("<main id=\"appointment\">\n");
    render_profile(&mut html, view);
    render_slots(&mut html, view);
    render_related(&mut html, view);
    html.push_str("</main>\n");
    html.push_str(PAGE_TAIL);
    html
}

pub fn render_confirmation(request: &BookingRequest) -> String {
    format!(
        "{PAGE_HEAD}<main id=\"appointment\">\n\
         <section class=\"confirmation\" data-booking-id=\"{id}\">\n\
         <p>Appointment requested for {date} at {time}.</p>\n\
         <a href=\"{back}\">Back to booking slots</a>\n\
         </section>\n\
         </main>\n{PAGE_TAIL}",
        id = request.id,
        date = request.date.format("%a %-d %b %Y"),
        time = escape(&request.time.to_lowercase()),
        back = escape(&page_path(&request.doctor_id)),
    )
}

/// Shown when a form booking is rejected; links back to the same day.
pub fn render_booking_error(doc_id: &str, day: usize, message: &str) -> String {
    format!(
        "{PAGE_HEAD}<main id=\"appointment\">\n\
         <section class=\"booking-error\">\n\
         <p class=\"error\">{message}</p>\n\
         <a href=\"{back}\">Back to booking slots</a>\n\
         </section>\n\
         </main>\n{PAGE_TAIL}",
        message = escape(message),
        back = escape(&format!("{}?day={day}", page_path(doc_id))),
    )
}

fn render_profile(html: &mut String, view: &AppointmentView) {
    let p = &view.profile;
    let verified = if p.verified {
        " <span class=\"verified\" title=\"Verified\">&#10004;</span>"
    } else {
        ""
    };
    let _ = write!(
        html,
        "<section class=\"profile\">\n\
         <img class=\"doctor-image\" src=\"{image}\" alt=\"\">\n\
         <div class=\"details\">\n\
         <p class=\"name\">{name}{verified}</p>\n\
         <p class=\"qualification\">{qualification} <span class=\"experience\">{experience}</span></p>\n\
         <p class=\"about-title\">About</p>\n\
         <p class=\"about\">{about}</p>\n\
         <p class=\"fee\">Appointment fee: <span>{fee}</span></p>\n\
         </div>\n\
         </section>\n",
        image = escape(&p.image),
        name = escape(&p.name),
        qualification = escape(&p.qualification),
        experience = escape(&p.experience),
        about = escape(&p.about),
        fee = escape(&p.fee),
    );
}

fn render_slots(html: &mut String, view: &AppointmentView) {
    html.push_str("<section class=\"booking-slots\">\n<p>Booking Slots</p>\n<div class=\"days\">\n");
    match &view.days_message {
        Some(message) => {
            let _ = writeln!(html, "<p>{}</p>", escape(message));
        }
        None => {
            for day in &view.days {
                let _ = writeln!(
                    html,
                    "<a class=\"day{}\" href=\"{}\"><p>{}</p><p>{}</p></a>",
                    if day.selected { " selected" } else { "" },
                    escape(&day.href),
                    escape(&day.weekday),
                    day.day_of_month,
                );
            }
        }
    }
    html.push_str("</div>\n<div class=\"times\">\n");
    match &view.times_message {
        Some(message) => {
            let _ = writeln!(html, "<p>{}</p>", escape(message));
        }
        None => {
            for time in &view.times {
                let _ = writeln!(
                    html,
                    "<a class=\"time{}\" href=\"{}\">{}</a>",
                    if time.selected { " selected" } else { "" },
                    escape(&time.href),
                    escape(&time.label),
                );
            }
        }
    }
    html.push_str("</div>\n");

    let booking = &view.booking;
    let time_value = view.selection.time.as_deref().unwrap_or("");
    let _ = write!(
        html,
        "<form class=\"book\" method=\"post\" action=\"{action}\">\n\
         <input type=\"hidden\" name=\"day\" value=\"{day}\">\n\
         <input type=\"hidden\" name=\"time\" value=\"{time}\">\n\
         <button type=\"submit\"{disabled}>{label}</button>\n\
         </form>\n\
         </section>\n",
        action = escape(&booking.form_action),
        day = view.selection.day,
        time = escape(time_value),
        disabled = if booking.enabled { "" } else { " disabled" },
        label = escape(&booking.label),
    );
}

fn render_related(html: &mut String, view: &AppointmentView) {
    let related = &view.related;
    let _ = writeln!(
        html,
        "<section class=\"related\" data-doc-id=\"{}\" data-speciality=\"{}\">",
        escape(&related.doctor_id),
        escape(&related.speciality),
    );
    html.push_str("<h2>Related Doctors</h2>\n");
    for doc in &related.doctors {
        let _ = writeln!(
            html,
            "<a class=\"related-doctor\" href=\"{}\"><img src=\"{}\" alt=\"\"><p>{}</p><p>{}</p></a>",
            escape(&doc.href),
            escape(&doc.image),
            escape(&doc.name),
            escape(&doc.speciality),
        );
    }
    html.push_str("</section>\n");
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
