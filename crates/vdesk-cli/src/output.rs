//! Terminal output formatting.

use anyhow::Result;
use colored::{ColoredString, Colorize};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;
use vdesk_core::booking::model::{Booking, BookingStatus, BookingStatusCounts};
use vdesk_core::booking::status_counts;
use vdesk_core::date::format_date;
use vdesk_core::event::model::{Event, EventStatus};
use vdesk_core::offer::model::{Offer, OfferStatus};
use vdesk_core::profile::model::Profile;
use vdesk_core::property::model::Property;
use vdesk_core::query::StatusFilter;
use vdesk_core::DomainStore;

/// Print any serializable value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Report an id that matched nothing. Not an error.
pub fn print_not_found(kind: &str, id: &str) {
    println!("{} No {} with id {}; nothing changed.", "·".dimmed(), kind, id.yellow());
}

pub fn event_status_colored(status: EventStatus) -> ColoredString {
    match status {
        EventStatus::Active => status.as_str().green(),
        EventStatus::Past => status.as_str().dimmed(),
        EventStatus::Deactivated => status.as_str().red(),
    }
}

pub fn offer_status_colored(status: OfferStatus) -> ColoredString {
    match status {
        OfferStatus::Active => status.as_str().green(),
        OfferStatus::Deactivated => status.as_str().red(),
    }
}

pub fn booking_status_colored(status: BookingStatus) -> ColoredString {
    match status {
        BookingStatus::Confirmed => status.as_str().green(),
        BookingStatus::Pending => status.as_str().yellow(),
        BookingStatus::Cancelled => status.as_str().red(),
    }
}

/// Print properties as a table.
pub fn print_properties_table(properties: &[&Property]) {
    if properties.is_empty() {
        println!("{}", "No properties found.".dimmed());
        return;
    }

    let name_w = flexible_width(52);
    println!(
        "{:<6} {} {:<16} {:>9} {:>9}",
        "ID",
        pad_right("Name / Location", name_w),
        "Type",
        "Capacity",
        "Bookings"
    );
    println!("{}", "─".repeat(name_w + 44));

    for property in properties {
        let mark = if property.is_verified() { "✓".green() } else { " ".normal() };
        println!(
            "{:<6} {} {:<16} {:>9} {:>9} {}",
            truncate_visual(&property.id, 6),
            pad_right(&truncate_visual(&property.name, name_w), name_w).cyan(),
            property.kind.as_str(),
            optional_number(property.occupancy),
            optional_number(property.total_bookings),
            mark
        );
        println!("{:<6} {}", "", truncate_visual(&property.location, name_w).dimmed());
    }

    println!();
    println!("{} propert{} total", properties.len(), if properties.len() == 1 { "y" } else { "ies" });
}

/// Print a single property.
pub fn print_property(property: &Property) {
    let verified = if property.is_verified() { " ✓ verified".green() } else { "".normal() };
    println!("{} {}{}", property.name.cyan().bold(), format!("({})", property.id).dimmed(), verified);
    println!("{}: {}", "Type".bold(), property.kind);
    println!("{}: {}", "Location".bold(), property.location);

    if let Some(occupancy) = property.occupancy {
        println!("{}: {}", "Capacity".bold(), occupancy);
    }
    if let Some(total) = property.total_bookings {
        println!("{}: {}", "Bookings".bold(), total);
    }
    if let Some(fee) = &property.entry_fee {
        println!("{}: {}", "Entry fee".bold(), fee);
    }
    print_tags("Themes", property.themes.as_deref());
    print_tags("Amenities", property.amenities.as_deref());
}

fn print_tags(label: &str, tags: Option<&[String]>) {
    if let Some(tags) = tags.filter(|t| !t.is_empty()) {
        println!("{}: {}", label.bold(), tags.join(", "));
    }
}

/// Print events as a table.
pub fn print_events_table(events: &[&Event]) {
    if events.is_empty() {
        println!("{}", "No events found.".dimmed());
        return;
    }

    let title_w = flexible_width(60);
    println!(
        "{:<10} {} {:<12} {:<7} {:<12} {:<6} {:>9}",
        "ID",
        pad_right("Title", title_w),
        "Date",
        "Time",
        "Status",
        "",
        "Bookings"
    );
    println!("{}", "─".repeat(title_w + 62));

    for event in events {
        let badge = if event.published { "LIVE".green() } else { "DRAFT".dimmed() };
        let bookings = match (event.bookings_count, event.booking_limit) {
            (Some(count), Some(limit)) => format!("{}/{}", count, limit),
            (Some(count), None) => count.to_string(),
            (None, Some(limit)) => format!("max {}", limit),
            (None, None) => "-".to_string(),
        };
        println!(
            "{:<10} {} {:<12} {:<7} {:<12} {:<6} {:>9}",
            truncate_visual(&event.id, 10),
            pad_right(&truncate_visual(&event.title, title_w), title_w).cyan(),
            format_date(&event.date),
            event.start_time.as_deref().unwrap_or("-"),
            event_status_colored(event.status),
            badge,
            bookings
        );
    }

    println!();
    println!("{} event(s) total", events.len());
}

/// Print offers as a table; offers running on `today` are marked LIVE.
pub fn print_offers_table(offers: &[&Offer], today: &str) {
    if offers.is_empty() {
        println!("{}", "No offers found.".dimmed());
        return;
    }

    let name_w = flexible_width(62);
    println!(
        "{:<10} {} {:<23} {:<12} {:<12} {:>9}",
        "ID",
        pad_right("Name", name_w),
        "Valid",
        "Discount",
        "Status",
        "Bookings"
    );
    println!("{}", "─".repeat(name_w + 72));

    for offer in offers {
        let status = if offer.is_live_on(today) {
            "LIVE".green().bold()
        } else {
            offer_status_colored(offer.status)
        };
        println!(
            "{:<10} {} {:<23} {:<12} {:<12} {:>9}",
            truncate_visual(&offer.id, 10),
            pad_right(&truncate_visual(&offer.name, name_w), name_w).cyan(),
            format!("{} - {}", format_date(&offer.start_date), format_date(&offer.end_date)),
            offer.discount_label().unwrap_or_else(|| "-".to_string()),
            status,
            optional_number(offer.bookings_count)
        );
    }

    println!();
    println!("{} offer(s) total", offers.len());
}

/// Print the booking status filter chips with their counts.
pub fn print_status_chips(counts: &BookingStatusCounts, selected: StatusFilter<BookingStatus>) {
    let mut chips = vec![chip("All", counts.all, selected == StatusFilter::All)];
    for status in BookingStatus::ALL {
        chips.push(chip(
            status.as_str(),
            counts.get(status),
            selected == StatusFilter::Only(status),
        ));
    }
    println!("{}", chips.join("  "));
    println!();
}

fn chip(label: &str, count: usize, active: bool) -> String {
    let text = format!("{} ({})", label, count);
    if active {
        format!("[{}]", text).bold().to_string()
    } else {
        text.dimmed().to_string()
    }
}

/// Print bookings as a table.
pub fn print_bookings_table(bookings: &[&Booking]) {
    if bookings.is_empty() {
        println!("{}", "No bookings found.".dimmed());
        return;
    }

    let event_w = flexible_width(70);
    println!(
        "{:<6} {} {:<12} {:>6} {:<20} {:<10} {:>8}",
        "ID",
        pad_right("Event / Customer", event_w),
        "Date",
        "People",
        "Contact",
        "Status",
        "Price"
    );
    println!("{}", "─".repeat(event_w + 70));

    for booking in bookings {
        let verified = if booking.is_verified.unwrap_or(false) { " ✓".green() } else { "".normal() };
        println!(
            "{:<6} {} {:<12} {:>6} {:<20} {:<10} {:>8}",
            truncate_visual(&booking.id, 6),
            pad_right(&truncate_visual(&booking.event_name, event_w), event_w).cyan(),
            format_date(&booking.date),
            booking.people,
            truncate_visual(&booking.contact, 20),
            booking_status_colored(booking.status),
            booking.price.as_deref().unwrap_or("-")
        );
        if let Some(name) = &booking.customer_name {
            println!("{:<6} {}{}", "", name.dimmed(), verified);
        }
        if booking.is_actionable() {
            println!(
                "{:<6} {}",
                "",
                format!("vdesk bookings confirm {0} | vdesk bookings cancel {0}", booking.id).dimmed()
            );
        }
    }

    println!();
    println!("{} booking(s) shown", bookings.len());
}

/// Print the business profile.
pub fn print_profile(profile: &Profile) {
    let verified = if profile.company_verified { " ✓ company verified".green() } else { " unverified".yellow() };
    println!("{}{}", profile.name.cyan().bold(), verified);
    println!("{}: {}", "Email".bold(), profile.email);
    println!("{}: {}", "Phone".bold(), profile.phone);
    println!("{}: {}", "National ID".bold(), profile.national_id);
    println!("{}: {}", "Business ID".bold(), profile.business_id);
    println!("{}: {}", "Address".bold(), profile.address);
}

/// Print the overview screen.
pub fn print_dashboard(store: &DomainStore, today: &str) {
    let profile = store.profile();
    println!("{} {}", profile.name.cyan().bold(), format!("({})", profile.business_id).dimmed());
    println!("{}: {}", "Today".bold(), format_date(today));
    println!();

    let live_offers: Vec<&Offer> = store
        .offers()
        .iter()
        .filter(|o| o.status == OfferStatus::Active && o.is_live_on(today))
        .collect();
    let active_events = store
        .events()
        .iter()
        .filter(|e| e.status == EventStatus::Active)
        .count();
    let counts = status_counts(store.bookings());

    println!("{:<12} {}", "Properties".bold(), store.properties().len());
    println!("{:<12} {} ({} active)", "Events".bold(), store.events().len(), active_events);
    println!("{:<12} {} ({} live)", "Offers".bold(), store.offers().len(), live_offers.len());
    println!(
        "{:<12} {} ({} pending)",
        "Bookings".bold(),
        counts.all,
        counts.pending.to_string().yellow()
    );

    if !live_offers.is_empty() {
        println!();
        println!("{}", "Live offers".bold());
        for offer in live_offers {
            println!(
                "  {} {} until {}",
                offer.name.cyan(),
                offer.discount_label().unwrap_or_default(),
                format_date(&offer.end_date)
            );
        }
    }

    let pending: Vec<&Booking> = store.bookings().iter().filter(|b| b.is_actionable()).collect();
    if !pending.is_empty() {
        println!();
        println!("{}", "Awaiting confirmation".bold());
        for booking in pending {
            println!(
                "  {} {} · {} people · {}",
                booking.id.dimmed(),
                booking.event_name.cyan(),
                booking.people,
                format_date(&booking.date)
            );
        }
    }
}

fn optional_number(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Get terminal width, defaulting to 80.
fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Width left for the free-text column once `fixed` columns are placed.
fn flexible_width(fixed: usize) -> usize {
    term_width().saturating_sub(fixed).clamp(16, 40)
}

/// Pad a plain string to a given visual width (right-padded).
fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}

/// Truncate a string respecting visual width.
fn truncate_visual(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width - 2 {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("..");
    result
}
