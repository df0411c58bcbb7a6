use crate::schema::*;
use anyhow::Result;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Insertable)]
#[diesel(table_name=users)]
pub struct NewUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub local_admin: bool,
    pub global_admin: bool,
    pub created_at: i64, // ms
}

#[derive(Debug, Insertable)]
#[diesel(table_name=farms)]
pub struct NewFarm {
    pub id: String,
    pub name: String,
    pub description: String,
    pub user_id: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name=devices)]
pub struct NewDevice {
    pub id: String,
    pub name: String,
    pub device_type: String,
    pub registered_farm: String,
    pub bin_type: String,
    pub is_active: bool,
    pub low_battery: bool,
    pub created_at: i64, // ms
    pub farm_id: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name=sensor_readings)]
pub struct NewSensorReading {
    pub id: String,
    pub device_id: String,
    pub timestamp: i64, // ms
    pub humidity: Option<f32>,         // percent
    pub co2_concentration: Option<f32>, // ppm
    pub temperature: Option<f32>,      // °C
    pub lidar_distance: Option<f32>,   // cm
}

#[derive(Debug, Queryable)]
#[allow(unused)]
pub struct SensorReading {
    pub id: String,
    pub device_id: String,
    pub timestamp: i64,
    pub humidity: Option<f32>,
    pub co2_concentration: Option<f32>,
    pub temperature: Option<f32>,
    pub lidar_distance: Option<f32>,
}

pub struct Db {
    conn: SqliteConnection,
}

impl Db {
    pub fn connect() -> Result<Self> {
        dotenv().ok();
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        Self::connect_to(&database_url)
    }

    pub fn connect_to(database_url: &str) -> Result<Self> {
        let conn = SqliteConnection::establish(database_url)?;
        Ok(Self { conn })
    }

    pub fn insert_user(&mut self, user: &NewUser) -> Result<()> {
        diesel::insert_into(users::table)
            .values(user)
            .execute(&mut self.conn)?;
        Ok(())
    }

    pub fn insert_farm(&mut self, farm: &NewFarm) -> Result<()> {
        diesel::insert_into(farms::table)
            .values(farm)
            .execute(&mut self.conn)?;
        Ok(())
    }

    pub fn insert_device(&mut self, device: &NewDevice) -> Result<()> {
        diesel::insert_into(devices::table)
            .values(device)
            .execute(&mut self.conn)?;
        Ok(())
    }

    /// All readings of the batch commit or none do.
    pub fn insert_readings_batch(&mut self, readings: &[NewSensorReading]) -> Result<()> {
        self.conn.transaction::<_, anyhow::Error, _>(|conn| {
            for reading in readings {
                diesel::insert_into(sensor_readings::table)
                    .values(reading)
                    .execute(conn)?;
            }
            Ok(())
        })
    }

    pub fn reading_count(&mut self, device: &str) -> Result<i64> {
        use crate::schema::sensor_readings::dsl::*;
        let res = sensor_readings
            .filter(device_id.eq(device))
            .count()
            .get_result(&mut self.conn)?;
        Ok(res)
    }

    pub fn readings_for_device(&mut self, device: &str) -> Result<Vec<SensorReading>> {
        use crate::schema::sensor_readings::dsl::*;
        let res = sensor_readings
            .filter(device_id.eq(device))
            .order(timestamp.desc())
            .load::<SensorReading>(&mut self.conn)?;
        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::connection::SimpleConnection;

    fn test_db() -> Db {
        let mut db = Db::connect_to(":memory:").unwrap();
        db.conn
            .batch_execute(include_str!(
                "../migrations/2023-05-12-093021_create_tables/up.sql"
            ))
            .unwrap();
        db
    }

    fn reading(id: &str, ts: i64) -> NewSensorReading {
        NewSensorReading {
            id: id.to_owned(),
            device_id: "DEV001".to_owned(),
            timestamp: ts,
            humidity: Some(60.0),
            co2_concentration: Some(400.0),
            temperature: Some(22.0),
            lidar_distance: Some(150.0),
        }
    }

    #[test]
    fn seed_entities_roundtrip() {
        let mut db = test_db();

        db.insert_user(&NewUser {
            id: "user-1".to_owned(),
            username: "demo".to_owned(),
            email: "demo@example.com".to_owned(),
            password_hash: "bcrypt$...".to_owned(),
            local_admin: false,
            global_admin: false,
            created_at: 1_700_000_000_000,
        })
        .unwrap();

        db.insert_farm(&NewFarm {
            id: "farm001".to_owned(),
            name: "demo".to_owned(),
            description: "farm demo".to_owned(),
            user_id: "user-1".to_owned(),
        })
        .unwrap();

        db.insert_device(&NewDevice {
            id: "DEV001".to_owned(),
            name: "Greenhouse #1".to_owned(),
            device_type: "ESP32-S2".to_owned(),
            registered_farm: "Farm A".to_owned(),
            bin_type: "soy".to_owned(),
            is_active: true,
            low_battery: false,
            created_at: 1_700_000_000_000,
            farm_id: "farm001".to_owned(),
        })
        .unwrap();

        db.insert_readings_batch(&[reading("DEV001_reading_0", 1_700_000_000_000)])
            .unwrap();
        assert_eq!(db.reading_count("DEV001").unwrap(), 1);
    }

    #[test]
    fn batch_writes_every_reading() {
        let mut db = test_db();
        let readings: Vec<_> = (0..10)
            .map(|i| reading(&format!("DEV001_reading_{i}"), 1_700_000_000_000 - i * 3_600_000))
            .collect();

        db.insert_readings_batch(&readings).unwrap();
        assert_eq!(db.reading_count("DEV001").unwrap(), 10);

        let stored = db.readings_for_device("DEV001").unwrap();
        for pair in stored.windows(2) {
            assert!(pair[0].timestamp > pair[1].timestamp);
        }
    }

    #[test]
    fn batch_with_duplicate_id_commits_nothing() {
        let mut db = test_db();
        let readings = vec![
            reading("DEV001_reading_0", 3),
            reading("DEV001_reading_1", 2),
            reading("DEV001_reading_0", 1), // primary key collision
        ];

        assert!(db.insert_readings_batch(&readings).is_err());
        assert_eq!(db.reading_count("DEV001").unwrap(), 0);
    }

    #[test]
    fn duplicate_device_id_is_an_error() {
        let mut db = test_db();
        let device = NewDevice {
            id: "DEV001".to_owned(),
            name: "Greenhouse #1".to_owned(),
            device_type: "ESP32-S2".to_owned(),
            registered_farm: "Farm A".to_owned(),
            bin_type: "soy".to_owned(),
            is_active: true,
            low_battery: false,
            created_at: 0,
            farm_id: "farm001".to_owned(),
        };
        db.insert_device(&device).unwrap();
        assert!(db.insert_device(&device).is_err());
    }
}
