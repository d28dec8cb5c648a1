// src/domain/submission.rs

use crate::domain::listing::{Area, BillingPeriod, PropertyType};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Pulls a required, non-blank field out of a decoded form.
fn required<'a>(form: &'a HashMap<String, String>, key: &str, what: &str) -> Result<&'a str, String> {
    form.get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| format!("Missing {what}"))
}

fn optional(form: &HashMap<String, String>, key: &str) -> Option<String> {
    form.get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Minimal shape check shared by the booking and sign-in forms.
pub fn looks_like_email(email: &str) -> bool {
    let e = email.trim();
    !e.is_empty() && e.contains('@') && !e.starts_with('@') && !e.ends_with('@')
}

/// A tenant's request to reserve a property. Nothing is stored; the page
/// layer shows a confirmation with a reference code.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    pub listing_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub move_in: NaiveDate,
    pub message: Option<String>,
}

impl BookingRequest {
    pub fn from_form(listing_id: &str, form: &HashMap<String, String>) -> Result<Self, String> {
        let name = required(form, "name", "full name")?;
        let email = required(form, "email", "email address")?;
        if !looks_like_email(email) {
            return Err("Invalid email address".into());
        }
        let phone = required(form, "phone", "phone number")?;
        let move_in = required(form, "move_in", "move-in date")?;
        let move_in = NaiveDate::parse_from_str(move_in, "%Y-%m-%d")
            .map_err(|_| format!("Invalid move-in date: {move_in}"))?;

        Ok(BookingRequest {
            listing_id: listing_id.to_string(),
            name: name.to_string(),
            email: email.to_lowercase(),
            phone: phone.to_string(),
            move_in,
            message: optional(form, "message"),
        })
    }
}

/// ₦100 billion. Anything above is a typo, not a rent.
pub const MAX_DRAFT_PRICE: u64 = 100_000_000_000;

/// A property submitted from the agent dashboard, pending verification.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingDraft {
    pub title: String,
    pub location: String,
    pub area: Area,
    pub price: u64,
    pub billing_period: BillingPeriod,
    pub property_type: PropertyType,
    pub bedrooms: u32,
    pub description: String,
    pub amenities: Vec<String>,
}

impl ListingDraft {
    pub fn from_form(form: &HashMap<String, String>) -> Result<Self, String> {
        let title = required(form, "title", "property title")?;
        let location = required(form, "location", "full address")?;

        let area = required(form, "area", "area")?
            .parse::<Area>()
            .map_err(|e| e.to_string())?;
        let property_type = optional(form, "type")
            .as_deref()
            .unwrap_or("apartment")
            .parse::<PropertyType>()
            .map_err(|e| e.to_string())?;
        let billing_period = optional(form, "period")
            .as_deref()
            .unwrap_or("year")
            .parse::<BillingPeriod>()
            .map_err(|e| e.to_string())?;

        let price = required(form, "price", "price")?;
        let price = price
            .replace(',', "")
            .parse::<u64>()
            .ok()
            .filter(|p| (1..=MAX_DRAFT_PRICE).contains(p))
            .ok_or_else(|| format!("Invalid price: {price}"))?;

        let bedrooms = required(form, "bedrooms", "bedroom count")?;
        let bedrooms = bedrooms
            .parse::<u32>()
            .map_err(|_| format!("Invalid bedroom count: {bedrooms}"))?;

        let description = required(form, "description", "description")?;

        // Comma separated, blanks dropped.
        let amenities = optional(form, "amenities")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|a| !a.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(ListingDraft {
            title: title.to_string(),
            location: location.to_string(),
            area,
            price,
            billing_period,
            property_type,
            bedrooms,
            description: description.to_string(),
            amenities,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn booking_parses_valid_form() {
        let booking = BookingRequest::from_form(
            "2",
            &form(&[
                ("name", "Ada Obi"),
                ("email", " Ada@Example.com "),
                ("phone", "+234 800 000 0000"),
                ("move_in", "2024-03-01"),
                ("message", "  "),
            ]),
        )
        .unwrap();

        assert_eq!(booking.listing_id, "2");
        assert_eq!(booking.email, "ada@example.com");
        assert_eq!(booking.move_in, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(booking.message, None);
    }

    #[test]
    fn booking_rejects_bad_date_and_email() {
        let base = [
            ("name", "Ada"),
            ("email", "ada@example.com"),
            ("phone", "1"),
            ("move_in", "next week"),
        ];
        let err = BookingRequest::from_form("1", &form(&base)).unwrap_err();
        assert!(err.contains("move-in date"));

        let mut bad_email = base;
        bad_email[1] = ("email", "ada.example.com");
        bad_email[3] = ("move_in", "2024-03-01");
        let err = BookingRequest::from_form("1", &form(&bad_email)).unwrap_err();
        assert_eq!(err, "Invalid email address");
    }

    #[test]
    fn draft_parses_amenities_and_defaults() {
        let draft = ListingDraft::from_form(&form(&[
            ("title", "Terrace in Yaba"),
            ("location", "12 Herbert Macaulay Way, Yaba"),
            ("area", "Yaba"),
            ("price", "1,500,000"),
            ("bedrooms", "3"),
            ("description", "Bright terrace"),
            ("amenities", "Parking, , Security ,AC"),
        ]))
        .unwrap();

        assert_eq!(draft.area, Area::Yaba);
        assert_eq!(draft.price, 1_500_000);
        assert_eq!(draft.billing_period, BillingPeriod::Year);
        assert_eq!(draft.property_type, PropertyType::Apartment);
        assert_eq!(draft.amenities, vec!["Parking", "Security", "AC"]);
    }

    #[test]
    fn draft_rejects_missing_and_unknown_fields() {
        let err = ListingDraft::from_form(&form(&[("title", "x")])).unwrap_err();
        assert_eq!(err, "Missing full address");

        let err = ListingDraft::from_form(&form(&[
            ("title", "x"),
            ("location", "y"),
            ("area", "Abuja"),
        ]))
        .unwrap_err();
        assert!(err.contains("unknown area"));

        let err = ListingDraft::from_form(&form(&[
            ("title", "x"),
            ("location", "y"),
            ("area", "Ikoyi"),
            ("price", "0"),
        ]))
        .unwrap_err();
        assert_eq!(err, "Invalid price: 0");
    }

    #[test]
    fn draft_rejects_absurd_price() {
        let mut fields = form(&[
            ("title", "x"),
            ("location", "y"),
            ("area", "Ikoyi"),
            ("bedrooms", "2"),
            ("description", "z"),
        ]);

        fields.insert("price".into(), "18446744073709551615".into());
        let err = ListingDraft::from_form(&fields).unwrap_err();
        assert_eq!(err, "Invalid price: 18446744073709551615");

        fields.insert("price".into(), MAX_DRAFT_PRICE.to_string());
        let draft = ListingDraft::from_form(&fields).unwrap();
        assert_eq!(draft.price, MAX_DRAFT_PRICE);
    }
}
