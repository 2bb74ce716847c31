//! Booking form state from first keystroke to submission

use std::fmt;
use std::str::FromStr;

use validator::Validate;

use super::{RideRequest, Suggestion};
use crate::errors::{DomainError, FieldError, field_errors_from};
use crate::value_objects::GeoLocation;

/// One of the two address inputs of the booking form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    /// Where the ride starts
    Pickup,
    /// Where the ride ends
    Destination,
}

impl AddressField {
    /// Both fields in form order
    pub const ALL: [Self; 2] = [Self::Pickup, Self::Destination];

    /// Form field name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pickup => "pickupArea",
            Self::Destination => "destinationArea",
        }
    }

    /// Position in per-field arrays
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Pickup => 0,
            Self::Destination => 1,
        }
    }

    const fn unresolved_message(self) -> &'static str {
        match self {
            Self::Pickup => "Select a pickup location from the suggestions",
            Self::Destination => "Select a destination from the suggestions",
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddressField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pickupArea" | "pickup" => Ok(Self::Pickup),
            "destinationArea" | "destination" => Ok(Self::Destination),
            other => Err(DomainError::field(other, "Unknown address field")),
        }
    }
}

/// The booking form
///
/// Coordinates are only ever set by [`BookingDraft::resolve`]; editing the
/// text of a field drops whatever coordinates it had, so free-typed text can
/// never be submitted with stale coordinates.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct BookingDraft {
    #[validate(length(min = 1, message = "Pickup location is required"))]
    pickup_area: String,
    pickup_location: Option<GeoLocation>,
    #[validate(length(min = 1, message = "Destination location is required"))]
    destination_area: String,
    destination_location: Option<GeoLocation>,
}

impl BookingDraft {
    /// An empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of `field`
    pub fn area(&self, field: AddressField) -> &str {
        match field {
            AddressField::Pickup => &self.pickup_area,
            AddressField::Destination => &self.destination_area,
        }
    }

    /// Coordinates of `field`, present only after a suggestion was selected
    pub fn location(&self, field: AddressField) -> Option<GeoLocation> {
        match field {
            AddressField::Pickup => self.pickup_location,
            AddressField::Destination => self.destination_location,
        }
    }

    /// Replace the text of `field` with user input, invalidating its coordinates
    pub fn set_text(&mut self, field: AddressField, text: impl Into<String>) {
        let (area, location) = self.slot_mut(field);
        *area = text.into();
        *location = None;
    }

    /// Fill `field` from a selected suggestion
    ///
    /// The display name always replaces the text. If the suggestion carries
    /// unusable coordinates the field is left unresolved and the error is
    /// returned, so submission will be refused.
    pub fn resolve(
        &mut self,
        field: AddressField,
        suggestion: &Suggestion,
    ) -> Result<GeoLocation, DomainError> {
        let parsed = suggestion.location();
        let (area, location) = self.slot_mut(field);
        area.clone_from(&suggestion.display_name);
        *location = parsed.as_ref().ok().copied();
        parsed
    }

    /// Validate the draft and convert it into a ride request
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` with one error per failing field:
    /// an empty area, or an area whose coordinates were never resolved.
    pub fn to_ride_request(&self) -> Result<RideRequest, DomainError> {
        let mut errors: Vec<FieldError> = match self.validate() {
            Ok(()) => Vec::new(),
            Err(e) => field_errors_from(&e, |name| match name {
                "pickup_area" => AddressField::Pickup.as_str().to_string(),
                "destination_area" => AddressField::Destination.as_str().to_string(),
                other => other.to_string(),
            }),
        };

        for field in AddressField::ALL {
            let reported = errors.iter().any(|e| e.field == field.as_str());
            if !reported && self.location(field).is_none() {
                errors.push(FieldError::new(field.as_str(), field.unresolved_message()));
            }
        }

        match (self.pickup_location, self.destination_location) {
            (Some(pickup), Some(destination)) if errors.is_empty() => Ok(RideRequest {
                pickup_area: self.pickup_area.clone(),
                destination_area: self.destination_area.clone(),
                pickup_latitude: pickup.latitude(),
                pickup_longitude: pickup.longitude(),
                destination_latitude: destination.latitude(),
                destination_longitude: destination.longitude(),
            }),
            _ => {
                errors.sort_by_key(|e| {
                    AddressField::from_str(&e.field).map_or(usize::MAX, |f| f.index())
                });
                Err(DomainError::Validation(errors))
            },
        }
    }

    fn slot_mut(&mut self, field: AddressField) -> (&mut String, &mut Option<GeoLocation>) {
        match field {
            AddressField::Pickup => (&mut self.pickup_area, &mut self.pickup_location),
            AddressField::Destination => {
                (&mut self.destination_area, &mut self.destination_location)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn downing_street() -> Suggestion {
        Suggestion::new("10 Downing St, London", "51.5034", "-0.1276")
    }

    fn heathrow() -> Suggestion {
        Suggestion::new("Heathrow Airport, London", "51.4700", "-0.4543")
    }

    fn resolved_draft() -> BookingDraft {
        let mut draft = BookingDraft::new();
        draft.resolve(AddressField::Pickup, &downing_street()).unwrap();
        draft
            .resolve(AddressField::Destination, &heathrow())
            .unwrap();
        draft
    }

    #[test]
    fn resolve_sets_text_and_coordinates() {
        let mut draft = BookingDraft::new();
        draft.resolve(AddressField::Pickup, &downing_street()).unwrap();

        assert_eq!(draft.area(AddressField::Pickup), "10 Downing St, London");
        let location = draft.location(AddressField::Pickup).unwrap();
        assert!((location.latitude() - 51.5034).abs() < f64::EPSILON);
        assert!((location.longitude() + 0.1276).abs() < f64::EPSILON);
        assert!(draft.location(AddressField::Destination).is_none());
    }

    #[test]
    fn typing_after_selection_drops_coordinates() {
        let mut draft = resolved_draft();
        draft.set_text(AddressField::Pickup, "10 Downing St, Lond");
        assert!(draft.location(AddressField::Pickup).is_none());
        assert!(draft.location(AddressField::Destination).is_some());
    }

    #[test]
    fn resolve_with_bad_coordinates_leaves_field_unresolved() {
        let mut draft = BookingDraft::new();
        let broken = Suggestion::new("Nowhere", "n/a", "n/a");
        assert!(draft.resolve(AddressField::Pickup, &broken).is_err());
        assert_eq!(draft.area(AddressField::Pickup), "Nowhere");
        assert!(draft.location(AddressField::Pickup).is_none());
    }

    #[test]
    fn valid_draft_converts_to_numeric_request() {
        let request = resolved_draft().to_ride_request().unwrap();
        assert_eq!(request.pickup_area, "10 Downing St, London");
        assert_eq!(request.destination_area, "Heathrow Airport, London");
        assert!((request.pickup_latitude - 51.5034).abs() < f64::EPSILON);
        assert!((request.destination_longitude + 0.4543).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_destination_is_field_scoped_error() {
        let mut draft = BookingDraft::new();
        draft.resolve(AddressField::Pickup, &downing_street()).unwrap();

        let err = draft.to_ride_request().unwrap_err();
        assert_eq!(
            err.field_errors(),
            &[FieldError::new(
                "destinationArea",
                "Destination location is required"
            )]
        );
    }

    #[test]
    fn empty_draft_reports_both_fields_in_form_order() {
        let err = BookingDraft::new().to_ride_request().unwrap_err();
        let fields: Vec<&str> = err.field_errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["pickupArea", "destinationArea"]);
        assert_eq!(err.field_errors()[0].message, "Pickup location is required");
    }

    #[test]
    fn free_typed_text_without_selection_is_rejected() {
        let mut draft = resolved_draft();
        draft.set_text(AddressField::Destination, "somewhere I typed");

        let err = draft.to_ride_request().unwrap_err();
        assert_eq!(
            err.field_errors(),
            &[FieldError::new(
                "destinationArea",
                "Select a destination from the suggestions"
            )]
        );
    }

    #[test]
    fn address_field_names_match_form() {
        assert_eq!(AddressField::Pickup.to_string(), "pickupArea");
        assert_eq!(
            "destinationArea".parse::<AddressField>().unwrap(),
            AddressField::Destination
        );
        assert!("phone".parse::<AddressField>().is_err());
    }
}
