// file: src/render/card.rs
// description: plain text doctor card
// reference: terminal output formatting

use crate::models::Doctor;
use crate::utils::Validator;

const MAX_QUALIFICATIONS_WIDTH: usize = 60;

pub fn render_card(doctor: &Doctor) -> String {
    let mut lines = Vec::with_capacity(6);

    if doctor.available_today {
        lines.push(format!("{}  [Available Today]", doctor.name));
    } else {
        lines.push(doctor.name.clone());
    }

    lines.push(format!(
        "  {} · {} years experience · ★ {}",
        doctor.specialty, doctor.experience, doctor.rating
    ));

    if !doctor.qualifications.is_empty() {
        lines.push(format!(
            "  {}",
            Validator::truncate_text(&doctor.qualifications_line(), MAX_QUALIFICATIONS_WIDTH)
        ));
    }

    lines.push(format!(
        "  {} · ₹{} consultation fee",
        doctor.location, doctor.consultation_fee
    ));
    lines.push(format!("  Next available: {}", doctor.next_available));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DoctorCatalog;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_available_doctor() {
        let catalog = DoctorCatalog::bundled().unwrap();
        let card = render_card(catalog.get("1").unwrap());
        assert_eq!(
            card,
            "Dr. Rakesh Sharma  [Available Today]\n  \
             General Physician · 15 years experience · ★ 4.8\n  \
             MBBS, MD - Internal Medicine\n  \
             Mumbai · ₹800 consultation fee\n  \
             Next available: Today, 2:30 PM"
        );
    }

    #[test]
    fn test_render_unavailable_doctor_has_no_badge() {
        let catalog = DoctorCatalog::bundled().unwrap();
        let card = render_card(catalog.get("7").unwrap());
        assert!(card.starts_with("Dr. Sanjay Verma\n"));
        assert!(!card.contains("[Available Today]"));
        assert!(card.contains("MBBS, MD - Internal Medicine, FRCP"));
    }
}
