use crate::model::{Address, Company, Geo, UserRecord};
use crate::mvi::SliceState;

/// Form inputs in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Username,
    Name,
    Email,
    Phone,
    Website,
    Street,
    Suite,
    City,
    Zipcode,
    Lat,
    Lng,
    CompanyName,
    CatchPhrase,
    Bs,
}

impl FormField {
    pub const ALL: [FormField; 14] = [
        FormField::Username,
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Website,
        FormField::Street,
        FormField::Suite,
        FormField::City,
        FormField::Zipcode,
        FormField::Lat,
        FormField::Lng,
        FormField::CompanyName,
        FormField::CatchPhrase,
        FormField::Bs,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Username => "Username",
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Phone => "Phone",
            FormField::Website => "Website",
            FormField::Street => "Street",
            FormField::Suite => "Suite",
            FormField::City => "City",
            FormField::Zipcode => "Zipcode",
            FormField::Lat => "Lat",
            FormField::Lng => "Lng",
            FormField::CompanyName => "Company name",
            FormField::CatchPhrase => "Catch phrase",
            FormField::Bs => "Bs",
        }
    }

    /// Section heading printed above the first field of each group.
    pub fn section(self) -> Option<&'static str> {
        match self {
            FormField::Username => Some("Profile"),
            FormField::Street => Some("Address"),
            FormField::CompanyName => Some("Company"),
            _ => None,
        }
    }

    /// Message shown when a required field is left empty.
    /// Phone and website are optional.
    pub fn required_message(self) -> Option<&'static str> {
        match self {
            FormField::Username => Some("Username is required"),
            FormField::Name => Some("Name is required"),
            FormField::Email => Some("Email is required"),
            FormField::Phone | FormField::Website => None,
            FormField::Street => Some("Street is required"),
            FormField::Suite => Some("Suite is required"),
            FormField::City => Some("City is required"),
            FormField::Zipcode => Some("Zipcode is required"),
            FormField::Lat => Some("Lat is required"),
            FormField::Lng => Some("Lng is required"),
            FormField::CompanyName => Some("Company name is required"),
            FormField::CatchPhrase => Some("Catch phrase is required"),
            FormField::Bs => Some("Bs is required"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues([String; FormField::COUNT]);

impl FormValues {
    pub fn from_user(user: &UserRecord) -> Self {
        let mut values = Self::default();
        for field in FormField::ALL {
            let value = match field {
                FormField::Username => &user.username,
                FormField::Name => &user.name,
                FormField::Email => &user.email,
                FormField::Phone => &user.phone,
                FormField::Website => &user.website,
                FormField::Street => &user.address.street,
                FormField::Suite => &user.address.suite,
                FormField::City => &user.address.city,
                FormField::Zipcode => &user.address.zipcode,
                FormField::Lat => &user.address.geo.lat,
                FormField::Lng => &user.address.geo.lng,
                FormField::CompanyName => &user.company.name,
                FormField::CatchPhrase => &user.company.catch_phrase,
                FormField::Bs => &user.company.bs,
            };
            values.set(field, value.clone());
        }
        values
    }

    pub fn get(&self, field: FormField) -> &str {
        &self.0[field.index()]
    }

    pub fn set(&mut self, field: FormField, value: String) {
        self.0[field.index()] = value;
    }

    pub fn get_mut(&mut self, field: FormField) -> &mut String {
        &mut self.0[field.index()]
    }

    /// First empty required field, in form order.
    pub fn validate(&self) -> Result<(), FieldError> {
        for field in FormField::ALL {
            if let Some(message) = field.required_message() {
                if self.get(field).is_empty() {
                    return Err(FieldError { field, message });
                }
            }
        }
        Ok(())
    }

    pub fn to_record(&self, id: u64) -> UserRecord {
        let value = |field| self.get(field).to_string();
        UserRecord {
            id,
            name: value(FormField::Name),
            username: value(FormField::Username),
            email: value(FormField::Email),
            address: Address {
                street: value(FormField::Street),
                suite: value(FormField::Suite),
                city: value(FormField::City),
                zipcode: value(FormField::Zipcode),
                geo: Geo {
                    lat: value(FormField::Lat),
                    lng: value(FormField::Lng),
                },
            },
            phone: value(FormField::Phone),
            website: value(FormField::Website),
            company: Company {
                name: value(FormField::CompanyName),
                catch_phrase: value(FormField::CatchPhrase),
                bs: value(FormField::Bs),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit { id: u64 },
}

impl FormMode {
    pub fn title(self) -> &'static str {
        match self {
            FormMode::Add => "Add New User",
            FormMode::Edit { .. } => "Edit User",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum UserFormState {
    #[default]
    Hidden,
    Visible {
        mode: FormMode,
        values: FormValues,
        focused: usize,
        error: Option<FieldError>,
    },
}

impl SliceState for UserFormState {}

impl UserFormState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}
