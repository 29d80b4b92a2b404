use crate::models::DoctorRecord;

/// First record with a matching id. An empty directory has not loaded yet
/// and resolves to nothing.
pub fn resolve_profile<'a>(directory: &'a [DoctorRecord], doc_id: &str) -> Option<&'a DoctorRecord> {
    if directory.is_empty() {
        return None;
    }
    directory.iter().find(|doc| doc.id == doc_id)
}

/// Same speciality, other doctors, in directory order.
pub fn related_doctors<'a>(
    directory: &'a [DoctorRecord],
    doc_id: &str,
    speciality: &str,
) -> Vec<&'a DoctorRecord> {
    directory
        .iter()
        .filter(|doc| doc.speciality == speciality && doc.id != doc_id)
        .collect()
}
