//! Location fixtures for creating in-memory test data.

use entity::location;

/// Default test city.
pub const DEFAULT_CITY: &str = "Springfield";

/// Default test street.
pub const DEFAULT_STREET: &str = "742 Evergreen Terrace";

/// Creates a location entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - city: `"Springfield"`
/// - street: `"742 Evergreen Terrace"`
pub fn entity() -> location::Model {
    entity_builder().build()
}

/// Creates a location entity builder for customizing test data.
pub fn entity_builder() -> LocationEntityBuilder {
    LocationEntityBuilder::default()
}

/// Builder for creating customized location entity models.
pub struct LocationEntityBuilder {
    id: i32,
    city: String,
    street: String,
}

impl Default for LocationEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            city: DEFAULT_CITY.to_string(),
            street: DEFAULT_STREET.to_string(),
        }
    }
}

impl LocationEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.street = street.into();
        self
    }

    pub fn build(self) -> location::Model {
        location::Model {
            id: self.id,
            city: self.city,
            street: self.street,
        }
    }
}
