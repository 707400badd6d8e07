//! Row mapping between SQLite and domain records

use camp_domain::{Camp, CampInstructor, Curriculum, Instructor, Location};
use rusqlite::{Connection, Row, ToSql};

pub(crate) const CURRICULUM_COLUMNS: &str =
    "curriculums.id, curriculums.name, curriculums.description, curriculums.min_rating, \
     curriculums.max_rating, curriculums.active";

pub(crate) const LOCATION_COLUMNS: &str =
    "locations.id, locations.name, locations.max_capacity, locations.active";

pub(crate) const CAMP_COLUMNS: &str =
    "camps.id, camps.curriculum_id, camps.location_id, camps.start_date, camps.end_date, \
     camps.time_slot, camps.cost, camps.max_students, camps.active";

pub(crate) const INSTRUCTOR_COLUMNS: &str =
    "instructors.id, instructors.first_name, instructors.last_name, instructors.email, \
     instructors.phone, instructors.bio, instructors.active";

pub(crate) fn curriculum_from_row(row: &Row) -> rusqlite::Result<Curriculum> {
    Ok(Curriculum {
        id: Some(row.get(0)?),
        name: row.get(1)?,
        description: row.get(2)?,
        min_rating: Some(row.get(3)?),
        max_rating: Some(row.get(4)?),
        active: row.get(5)?,
    })
}

pub(crate) fn location_from_row(row: &Row) -> rusqlite::Result<Location> {
    Ok(Location {
        id: Some(row.get(0)?),
        name: row.get(1)?,
        max_capacity: row.get(2)?,
        active: row.get(3)?,
    })
}

pub(crate) fn camp_from_row(row: &Row) -> rusqlite::Result<Camp> {
    Ok(Camp {
        id: Some(row.get(0)?),
        curriculum_id: Some(row.get(1)?),
        location_id: Some(row.get(2)?),
        start_date: Some(row.get(3)?),
        end_date: Some(row.get(4)?),
        time_slot: Some(row.get(5)?),
        cost: row.get(6)?,
        max_students: row.get(7)?,
        active: row.get(8)?,
    })
}

pub(crate) fn instructor_from_row(row: &Row) -> rusqlite::Result<Instructor> {
    Ok(Instructor {
        id: Some(row.get(0)?),
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        email: row.get(3)?,
        phone: row.get(4)?,
        bio: row.get(5)?,
        active: row.get(6)?,
    })
}

pub(crate) fn assignment_from_row(row: &Row) -> rusqlite::Result<CampInstructor> {
    Ok(CampInstructor {
        id: Some(row.get(0)?),
        camp_id: row.get(1)?,
        instructor_id: row.get(2)?,
    })
}

/// Run a dynamically built query and map every row
pub(crate) fn query_all<T>(
    conn: &Connection,
    sql: &str,
    params: &[Box<dyn ToSql>],
    map: fn(&Row) -> rusqlite::Result<T>,
) -> rusqlite::Result<Vec<T>> {
    let mut stmt = conn.prepare(sql)?;
    let param_refs: Vec<&dyn ToSql> = params.iter().map(|p| p.as_ref()).collect();
    let rows = stmt
        .query_map(&param_refs[..], map)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}
