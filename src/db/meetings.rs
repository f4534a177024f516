use chrono::Utc;
use rusqlite::params;

use super::*;
use crate::types::{NewMeeting, SortKey};

fn row_to_meeting(row: &rusqlite::Row) -> rusqlite::Result<DbMeeting> {
    Ok(DbMeeting {
        id: row.get(0)?,
        title: row.get(1)?,
        date: row.get(2)?,
        time: row.get(3)?,
        location: row.get(4)?,
        link: row.get(5)?,
        participants: row.get(6)?,
        owner: row.get(7)?,
        completed: row.get(8)?,
        created_at: row.get(9)?,
    })
}

impl MeetingDb {
    // =========================================================================
    // Meetings
    // =========================================================================

    /// Query meetings by completion state, ascending by `sort` when given,
    /// else in insertion (id) order.
    ///
    /// The ORDER BY column comes from the fixed [`SortKey`] mapping, never
    /// from caller input.
    pub fn list_meetings(
        &self,
        completed: bool,
        sort: Option<SortKey>,
    ) -> Result<Vec<DbMeeting>, DbError> {
        let order_by = sort.map(SortKey::column).unwrap_or("id");
        let sql = format!(
            "SELECT id, title, date, time, location, link, participants, owner,
                    completed, created_at
             FROM meetings
             WHERE completed = ?1
             ORDER BY {order_by}"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![completed], row_to_meeting)?;

        let mut meetings = Vec::new();
        for row in rows {
            meetings.push(row?);
        }
        Ok(meetings)
    }

    /// Insert a new pending meeting and return its generated id.
    pub fn insert_meeting(&self, meeting: &NewMeeting) -> Result<i64, DbError> {
        self.conn.execute(
            "INSERT INTO meetings (title, date, time, location, link,
                                   participants, owner, completed, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 0, ?8)",
            params![
                meeting.title,
                meeting.date,
                meeting.time,
                meeting.location,
                meeting.link,
                meeting.participants,
                meeting.owner,
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Look up a single meeting by its id.
    pub fn get_meeting(&self, id: i64) -> Result<Option<DbMeeting>, DbError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, date, time, location, link, participants, owner,
                    completed, created_at
             FROM meetings
             WHERE id = ?1",
        )?;

        let mut rows = stmt.query_map(params![id], row_to_meeting)?;
        match rows.next() {
            Some(Ok(meeting)) => Ok(Some(meeting)),
            Some(Err(e)) => Err(DbError::Sqlite(e)),
            None => Ok(None),
        }
    }

    /// Flip `completed` to true. Returns whether a row was affected; a
    /// missing id is a no-op. There is no reverse transition.
    pub fn mark_completed(&self, id: i64) -> Result<bool, DbError> {
        let affected = self
            .conn
            .execute("UPDATE meetings SET completed = 1 WHERE id = ?1", params![id])?;
        Ok(affected > 0)
    }

    /// Remove a meeting. Returns whether a row was affected; a missing id is
    /// a no-op.
    pub fn delete_meeting(&self, id: i64) -> Result<bool, DbError> {
        let affected = self
            .conn
            .execute("DELETE FROM meetings WHERE id = ?1", params![id])?;
        Ok(affected > 0)
    }
}
