use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DentistDto {
    pub id: i32,
    pub name: String,
    pub last_name: String,
    pub license: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DentistRequestDto {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub license: Option<String>,
}
