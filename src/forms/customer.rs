use serde_json::{Map, Value};
use validator::Validate;

use crate::domain::customer::{NewCustomer, UpdateCustomer};
use crate::domain::types::{CustomerEmail, FirstName, LastName};
use crate::forms::FormError;

const REQUIRED_FIELDS: [&str; 3] = ["first_name", "last_name", "email"];

#[derive(Clone, Debug, Default, Validate, PartialEq, Eq)]
/// Customer payload accepted by create and update.
pub struct CustomerForm {
    /// Given name.
    #[validate(length(min = 1))]
    pub first_name: String,
    /// Family name.
    #[validate(length(min = 1))]
    pub last_name: String,
    /// Contact email, presence only.
    #[validate(length(min = 1))]
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    /// Explicit lifecycle flag; left untouched when absent.
    pub suspended: Option<bool>,
}

impl CustomerForm {
    /// Builds the form from a raw JSON body.
    ///
    /// Fields are inspected in declaration order and the first missing or
    /// mistyped one is reported. Unknown keys, `id` included, are ignored.
    pub fn from_json(payload: &Value) -> Result<Self, FormError> {
        let object = payload.as_object().ok_or(FormError::NotAnObject)?;

        let form = Self {
            first_name: required_string(object, "first_name")?,
            last_name: required_string(object, "last_name")?,
            email: required_string(object, "email")?,
            phone_number: optional_string(object, "phone_number")?,
            address: optional_string(object, "address")?,
            suspended: optional_bool(object, "suspended")?,
        };

        if let Err(errors) = form.validate() {
            let failed = errors.field_errors();
            if let Some(field) = REQUIRED_FIELDS
                .iter()
                .find(|field| failed.contains_key(**field))
            {
                return Err(FormError::EmptyField(*field));
            }
        }

        Ok(form)
    }

    fn required_values(&self) -> Result<(FirstName, LastName, CustomerEmail), FormError> {
        let first_name = FirstName::new(self.first_name.as_str())
            .map_err(|_| FormError::EmptyField("first_name"))?;
        let last_name = LastName::new(self.last_name.as_str())
            .map_err(|_| FormError::EmptyField("last_name"))?;
        let email = CustomerEmail::new(self.email.as_str())
            .map_err(|_| FormError::EmptyField("email"))?;
        Ok((first_name, last_name, email))
    }
}

fn required_string(object: &Map<String, Value>, field: &'static str) -> Result<String, FormError> {
    match object.get(field) {
        None | Some(Value::Null) => Err(FormError::MissingField(field)),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(FormError::InvalidType {
            field,
            expected: "string",
        }),
    }
}

fn optional_string(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, FormError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(FormError::InvalidType {
            field,
            expected: "string",
        }),
    }
}

fn optional_bool(object: &Map<String, Value>, field: &'static str) -> Result<Option<bool>, FormError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(value)) => Ok(Some(*value)),
        Some(_) => Err(FormError::InvalidType {
            field,
            expected: "boolean",
        }),
    }
}

impl TryFrom<CustomerForm> for NewCustomer {
    type Error = FormError;

    fn try_from(form: CustomerForm) -> Result<Self, Self::Error> {
        let (first_name, last_name, email) = form.required_values()?;
        Ok(NewCustomer::new(
            first_name,
            last_name,
            email,
            form.phone_number,
            form.address,
        )
        .suspended(form.suspended.unwrap_or(false)))
    }
}

impl TryFrom<CustomerForm> for UpdateCustomer {
    type Error = FormError;

    fn try_from(form: CustomerForm) -> Result<Self, Self::Error> {
        let (first_name, last_name, email) = form.required_values()?;
        Ok(UpdateCustomer {
            first_name,
            last_name,
            email,
            phone_number: form.phone_number,
            address: form.address,
            suspended: form.suspended,
        })
    }
}
