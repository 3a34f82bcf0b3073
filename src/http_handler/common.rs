use chrono::Datelike;

#[derive(serde::Deserialize, Debug)]
pub struct Launch {
    id: String,
    success: Option<bool>,
    date_utc: chrono::DateTime<chrono::Utc>,
    rocket: String,
    payloads: Vec<String>,
}

impl Launch {
    pub fn id(&self) -> &str { &self.id }
    pub fn success(&self) -> Option<bool> { self.success }
    pub fn rocket(&self) -> &str { &self.rocket }
    pub fn payloads(&self) -> &[String] { &self.payloads }

    #[cfg(test)]
    pub(crate) fn test(
        id: &str,
        success: Option<bool>,
        date_utc: chrono::DateTime<chrono::Utc>,
        rocket: &str,
        payloads: &[&str],
    ) -> Self {
        Self {
            id: String::from(id),
            success,
            date_utc,
            rocket: String::from(rocket),
            payloads: payloads.iter().map(|payload_id| String::from(*payload_id)).collect(),
        }
    }
}

#[derive(serde::Deserialize, Debug)]
pub struct Rocket {
    id: String,
    name: String,
}

impl Rocket {
    pub fn id(&self) -> &str { &self.id }
    pub fn name(&self) -> &str { &self.name }

    #[cfg(test)]
    pub(crate) fn test(id: &str, name: &str) -> Self {
        Self { id: String::from(id), name: String::from(name) }
    }
}

#[derive(serde::Deserialize, Debug)]
pub struct Payload {
    id: String,
    created_at: chrono::DateTime<chrono::Utc>,
    mass_kg: Option<f64>,
}

impl Payload {
    pub fn id(&self) -> &str { &self.id }
    pub fn mass_kg(&self) -> Option<f64> { self.mass_kg }

    #[cfg(test)]
    pub(crate) fn test(
        id: &str,
        created_at: chrono::DateTime<chrono::Utc>,
        mass_kg: Option<f64>,
    ) -> Self {
        Self { id: String::from(id), created_at, mass_kg }
    }
}

pub trait Dated {
    fn date(&self) -> chrono::DateTime<chrono::Utc>;

    fn year(&self) -> i32 { self.date().year() }
}

impl Dated for Launch {
    fn date(&self) -> chrono::DateTime<chrono::Utc> { self.date_utc }
}

impl Dated for Payload {
    fn date(&self) -> chrono::DateTime<chrono::Utc> { self.created_at }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_launch_success_decodes_as_tri_state() {
        let launches: Vec<Launch> = serde_json::from_value(serde_json::json!([
            {
                "id": "l1",
                "success": true,
                "date_utc": "2020-05-30T19:22:00.000Z",
                "rocket": "r1",
                "payloads": ["p1"]
            },
            {
                "id": "l2",
                "success": null,
                "date_utc": "2021-01-01T00:00:00.000Z",
                "rocket": "r1",
                "payloads": []
            },
            {
                "id": "l3",
                "date_utc": "2021-06-01T00:00:00.000Z",
                "rocket": "r2",
                "payloads": ["p2", "p3"]
            }
        ]))
        .unwrap();
        assert_eq!(launches[0].success(), Some(true));
        assert_eq!(launches[1].success(), None);
        assert_eq!(launches[2].success(), None);
        assert_eq!(launches[2].payloads(), ["p2", "p3"]);
    }

    #[test]
    fn test_payload_mass_decodes_null_and_absent_as_unknown() {
        let payloads: Vec<Payload> = serde_json::from_value(serde_json::json!([
            {"id": "p1", "created_at": "2019-07-01T12:00:00.000Z", "mass_kg": 4311.0},
            {"id": "p2", "created_at": "2019-07-02T12:00:00.000Z", "mass_kg": null},
            {"id": "p3", "created_at": "2019-07-03T12:00:00.000Z"}
        ]))
        .unwrap();
        assert_eq!(payloads[0].mass_kg(), Some(4311.0));
        assert_eq!(payloads[1].mass_kg(), None);
        assert_eq!(payloads[2].mass_kg(), None);
    }

    #[test]
    fn test_unknown_wire_fields_are_ignored() {
        let rockets: Vec<Rocket> = serde_json::from_value(serde_json::json!([
            {"id": "r1", "name": "Falcon 9", "stages": 2, "active": true}
        ]))
        .unwrap();
        assert_eq!(rockets[0].id(), "r1");
        assert_eq!(rockets[0].name(), "Falcon 9");
    }

    #[test]
    fn test_dated_year_uses_utc_calendar_year() {
        let new_years_eve = chrono::Utc.with_ymd_and_hms(2020, 12, 31, 23, 59, 59).unwrap();
        let launch = Launch::test("l1", Some(true), new_years_eve, "r1", &[]);
        assert_eq!(launch.year(), 2020);
        let payload = Payload::test("p1", new_years_eve, None);
        assert_eq!(payload.year(), 2020);
    }
}
