//! Room commands.

use clap::Subcommand;

use spark_api::{Room, RoomCreateParams, RoomListParams, RoomUpdateParams};
use spark_core::config::AppConfig;
use spark_core::error::SparkResult;
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum RoomsAction {
    /// List rooms.
    List {
        /// Only rooms belonging to this team.
        team_id: Option<String>,
        /// Room type: direct or group.
        #[arg(long = "type")]
        room_type: Option<String>,
        /// Sort by id, lastactivity or created.
        #[arg(short, long)]
        sort: Option<String>,
        /// Maximum number of rooms.
        #[arg(short = 'n', long)]
        max: Option<u32>,
    },
    /// Show a room.
    Get {
        room_id: String,
    },
    /// Create a room.
    Create {
        title: String,
        /// Create the room inside this team.
        #[arg(long)]
        team: Option<String>,
    },
    /// Rename a room.
    Rename {
        room_id: String,
        title: String,
    },
    /// Delete a room.
    Delete {
        room_id: String,
    },
}

pub async fn run(config: &AppConfig, action: RoomsAction, format: OutputFormat) -> SparkResult<()> {
    let api = super::create_api_client(config)?;
    let rooms = api.rooms();

    match action {
        RoomsAction::List { team_id, room_type, sort, max } => {
            let params = RoomListParams {
                team_id,
                room_type,
                sort_by: sort,
                max,
            };
            let list = rooms.list(params).await?;
            match format {
                OutputFormat::Json => super::print_json(&list),
                OutputFormat::Text => print_rooms(&list),
            }
        }
        RoomsAction::Get { room_id } => {
            let room = rooms.get(&room_id).await?;
            match format {
                OutputFormat::Json => super::print_json(&room),
                OutputFormat::Text => print_rooms(std::slice::from_ref(&room)),
            }
        }
        RoomsAction::Create { title, team } => {
            let room = rooms
                .create(RoomCreateParams { title, team_id: team })
                .await?;
            match format {
                OutputFormat::Json => super::print_json(&room),
                OutputFormat::Text => super::print_done(&format!("created room {}", room.id)),
            }
        }
        RoomsAction::Rename { room_id, title } => {
            let room = rooms.update(&room_id, &RoomUpdateParams { title }).await?;
            match format {
                OutputFormat::Json => super::print_json(&room),
                OutputFormat::Text => super::print_done(&format!("renamed room {}", room.id)),
            }
        }
        RoomsAction::Delete { room_id } => {
            rooms.delete(&room_id).await?;
            match format {
                OutputFormat::Json => super::print_json(&serde_json::json!({ "deleted": room_id })),
                OutputFormat::Text => super::print_done(&format!("deleted room {room_id}")),
            }
        }
    }

    Ok(())
}

fn print_rooms(rooms: &[Room]) {
    if rooms.is_empty() {
        super::print_empty("rooms");
        return;
    }
    let mut table = super::new_table(vec!["ID", "Title", "Type", "Last Activity"]);
    for room in rooms {
        table.add_row(vec![
            room.id.clone(),
            super::truncate(room.title.as_deref().unwrap_or("-"), 40),
            super::or_dash(room.room_type.as_deref()),
            super::format_date(room.last_activity),
        ]);
    }
    println!("{table}");
}
