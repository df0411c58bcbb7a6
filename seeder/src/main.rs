use anyhow::Result;
use chrono::Utc;
use log::info;

mod db;
mod gen;
mod schema;

use db::{Db, NewDevice, NewFarm, NewUser};

const FARM_ID: &str = "farm001";

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let mut db = Db::connect()?;
    let now_ms = Utc::now().timestamp_millis();

    // 1) demo user
    let user = NewUser {
        id: uuid::Uuid::new_v4().to_string(),
        username: "demo".to_owned(),
        email: "demo@example.com".to_owned(),
        password_hash: "bcrypt$...".to_owned(), // placeholder, auth is out of scope
        local_admin: false,
        global_admin: false,
        created_at: now_ms,
    };
    db.insert_user(&user)?;
    println!("created user {} <{}>", user.username, user.email);

    // 2) demo farm
    db.insert_farm(&NewFarm {
        id: FARM_ID.to_owned(),
        name: "demo".to_owned(),
        description: "farm demo".to_owned(),
        user_id: user.id.clone(),
    })?;
    println!("created farm {FARM_ID}");

    // 3) devices, each with one batch of historical readings
    for profile in &gen::DEVICE_PROFILES {
        db.insert_device(&NewDevice {
            id: profile.id.to_owned(),
            name: profile.name.to_owned(),
            device_type: "ESP32-S2".to_owned(),
            registered_farm: "Farm A".to_owned(),
            bin_type: profile.bin_type.to_owned(),
            is_active: true,
            low_battery: false,
            created_at: now_ms,
            farm_id: FARM_ID.to_owned(),
        })?;
        info!("created device {}", profile.id);

        let readings = gen::synth_readings(profile, now_ms, gen::READINGS_PER_DEVICE);
        db.insert_readings_batch(&readings)?;
        println!(
            "seeded {} readings for {}",
            db.reading_count(profile.id)?,
            profile.id
        );
    }

    // read back the newest reading per device as a sanity check
    for profile in &gen::DEVICE_PROFILES {
        if let Some(latest) = db.readings_for_device(profile.id)?.first() {
            info!(
                "{}: latest reading {} at {}",
                profile.id, latest.id, latest.timestamp
            );
        }
    }

    println!("Seed data written!");
    println!(
        "Created {} devices with {} sensor readings each",
        gen::DEVICE_PROFILES.len(),
        gen::READINGS_PER_DEVICE
    );
    Ok(())
}
