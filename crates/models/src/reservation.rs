use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

/// A stored parking booking. Rows are write-once: there is no update or delete path.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: String,
    pub checkin: String,
    pub checkout: String,
    pub car_model: String,
    pub car_size: String,
    pub license_plate: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// The eight caller-supplied fields of a reservation; `id` is assigned on insert.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReservation {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub checkin: String,
    pub checkout: String,
    pub car_model: String,
    pub car_size: String,
    pub license_plate: String,
}

impl NewReservation {
    fn fields(&self) -> [(&'static str, &str); 8] {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("checkin", &self.checkin),
            ("checkout", &self.checkout),
            ("car_model", &self.car_model),
            ("car_size", &self.car_size),
            ("license_plate", &self.license_plate),
        ]
    }
}

impl From<Model> for NewReservation {
    fn from(m: Model) -> Self {
        Self {
            name: m.name,
            email: m.email,
            phone: m.phone,
            checkin: m.checkin,
            checkout: m.checkout,
            car_model: m.car_model,
            car_size: m.car_size,
            license_plate: m.license_plate,
        }
    }
}

/// Every field is required text; empty strings are rejected, other values are kept verbatim.
pub fn validate(input: &NewReservation) -> Result<(), errors::ModelError> {
    for (field, value) in input.fields() {
        if value.is_empty() {
            return Err(errors::ModelError::Validation(format!("{field} must not be empty")));
        }
    }
    Ok(())
}

/// Insert a reservation as a single statement; a duplicate email surfaces as
/// `ModelError::UniqueViolation` and leaves the table untouched.
pub async fn create(db: &DatabaseConnection, input: &NewReservation) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: NotSet,
        name: Set(input.name.clone()),
        email: Set(input.email.clone()),
        phone: Set(input.phone.clone()),
        checkin: Set(input.checkin.clone()),
        checkout: Set(input.checkout.clone()),
        car_model: Set(input.car_model.clone()),
        car_size: Set(input.car_size.clone()),
        license_plate: Set(input.license_plate.clone()),
    };
    Ok(am.insert(db).await?)
}

/// Exact, case-sensitive lookup by email.
pub async fn find_by_email(db: &DatabaseConnection, email: &str) -> Result<Option<Model>, errors::ModelError> {
    let found = Entity::find()
        .filter(Column::Email.eq(email))
        .one(db)
        .await?;
    Ok(found)
}
