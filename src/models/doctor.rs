use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DoctorRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub image: String,
    pub degree: String,
    pub speciality: String,
    /// Years of experience.
    pub experience: u32,
    pub about: String,
    pub fees: u32,
}

impl DoctorRecord {
    pub fn qualification(&self) -> String {
        format!("{} - {}", self.degree, self.speciality)
    }

    pub fn experience_label(&self) -> String {
        format!("{} years", self.experience)
    }

    pub fn fee_label(&self, currency_symbol: &str) -> String {
        format!("{currency_symbol}{}", self.fees)
    }
}
