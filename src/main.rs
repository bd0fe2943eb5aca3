use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead};
use std::path::PathBuf;
use vidbox::{load_catalog, MediaConsole, Outcome, SearchResponse};

#[derive(Parser, Debug)]
#[command(name = "vidbox")]
#[command(about = "Interactive video catalog browser", long_about = None)]
struct Args {
    /// Path to the catalog file (one `Title|video_id|tag1,tag2` per line)
    #[arg(short = 'c', long, default_value = "videos.txt")]
    catalog: String,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

const HELP: &str = "Available commands:
  NUMBER_OF_VIDEOS - Shows how many videos are in the library.
  SHOW_ALL_VIDEOS - Lists all videos from the library.
  PLAY <video_id> - Plays the specified video.
  PLAY_RANDOM - Plays a random video.
  STOP - Stops the current video.
  PAUSE - Pauses the current video.
  CONTINUE - Resumes the currently paused video.
  SHOW_PLAYING - Shows the video that is currently playing.
  CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist.
  ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.
  REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the playlist.
  CLEAR_PLAYLIST <playlist_name> - Removes all the videos from the playlist.
  DELETE_PLAYLIST <playlist_name> - Deletes the playlist.
  SHOW_PLAYLIST <playlist_name> - Lists all the videos in this playlist.
  SHOW_ALL_PLAYLISTS - Lists all the playlists.
  SEARCH_VIDEOS <search_term> - Lists all videos whose titles contain the search term.
  SEARCH_VIDEOS_WITH_TAG <tag_name> - Lists all videos whose tags contain the given tag.
  FLAG_VIDEO <video_id> [flag_reason] - Marks a video as flagged.
  ALLOW_VIDEO <video_id> - Removes a flag from a video.
  HELP - Displays this help.
  EXIT - Terminates the program.";

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in the catalog path
    let catalog_path = shellexpand::tilde(&args.catalog);
    let catalog = load_catalog(PathBuf::from(catalog_path.as_ref()).as_path())
        .with_context(|| format!("Failed to load video catalog from {}", catalog_path))?;

    let mut console = MediaConsole::new(catalog);
    let mut input = io::stdin().lock();

    println!("Hello and welcome to YouTube, what would you like to do?");
    while let Some(line) = read_line(&mut input)? {
        if !dispatch(&mut console, &mut input, &line)? {
            break;
        }
    }
    println!("YouTube has now terminated its execution. Thank you and goodbye!");

    Ok(())
}

/// Read one line, trimmed; `None` on end of input
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf).context("Failed to read input")? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

fn print_outcome(outcome: &Outcome) {
    for line in &outcome.lines {
        println!("{line}");
    }
}

/// Handle one command line; returns false when the session should end
fn dispatch(console: &mut MediaConsole, input: &mut impl BufRead, line: &str) -> Result<bool> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((verb, args)) = tokens.split_first() else {
        return Ok(true);
    };

    match verb.to_uppercase().as_str() {
        "NUMBER_OF_VIDEOS" => print_outcome(&console.number_of_videos()),
        "SHOW_ALL_VIDEOS" => print_outcome(&console.show_all_videos()),
        "PLAY" => match args.first() {
            Some(id) => print_outcome(&console.play(id)),
            None => println!("Please enter PLAY command followed by video_id."),
        },
        "PLAY_RANDOM" => print_outcome(&console.play_random()),
        "STOP" => print_outcome(&console.stop()),
        "PAUSE" => print_outcome(&console.pause()),
        "CONTINUE" => print_outcome(&console.resume()),
        "SHOW_PLAYING" => print_outcome(&console.show_playing()),
        "CREATE_PLAYLIST" => match args.first() {
            Some(name) => print_outcome(&console.create_playlist(name)),
            None => println!("Please enter CREATE_PLAYLIST command followed by a playlist name."),
        },
        "ADD_TO_PLAYLIST" => match args {
            [name, id, ..] => print_outcome(&console.add_to_playlist(name, id)),
            _ => println!(
                "Please enter ADD_TO_PLAYLIST command followed by a playlist name and video_id to add."
            ),
        },
        "REMOVE_FROM_PLAYLIST" => match args {
            [name, id, ..] => print_outcome(&console.remove_from_playlist(name, id)),
            _ => println!(
                "Please enter REMOVE_FROM_PLAYLIST command followed by a playlist name and video_id to remove."
            ),
        },
        "CLEAR_PLAYLIST" => match args.first() {
            Some(name) => print_outcome(&console.clear_playlist(name)),
            None => println!("Please enter CLEAR_PLAYLIST command followed by a playlist name."),
        },
        "DELETE_PLAYLIST" => match args.first() {
            Some(name) => print_outcome(&console.delete_playlist(name)),
            None => println!("Please enter DELETE_PLAYLIST command followed by a playlist name."),
        },
        "SHOW_PLAYLIST" => match args.first() {
            Some(name) => print_outcome(&console.show_playlist(name)),
            None => println!("Please enter SHOW_PLAYLIST command followed by a playlist name."),
        },
        "SHOW_ALL_PLAYLISTS" => print_outcome(&console.show_all_playlists()),
        "SEARCH_VIDEOS" => match args.first() {
            Some(term) => {
                let response = console.search_videos(term);
                run_search(console, input, response)?;
            }
            None => println!("Please enter SEARCH_VIDEOS command followed by a search term."),
        },
        "SEARCH_VIDEOS_WITH_TAG" => match args.first() {
            Some(tag) => {
                let response = console.search_videos_with_tag(tag);
                run_search(console, input, response)?;
            }
            None => {
                println!("Please enter SEARCH_VIDEOS_WITH_TAG command followed by a video tag.")
            }
        },
        "FLAG_VIDEO" => match args {
            [id] => print_outcome(&console.flag_video(id, None)),
            [id, reason, ..] => print_outcome(&console.flag_video(id, Some(reason))),
            [] => println!("Please enter FLAG_VIDEO command followed by a video_id."),
        },
        "ALLOW_VIDEO" => match args.first() {
            Some(id) => print_outcome(&console.allow_video(id)),
            None => println!("Please enter ALLOW_VIDEO command followed by a video_id."),
        },
        "HELP" => println!("{HELP}"),
        "EXIT" | "QUIT" => return Ok(false),
        _ => println!("Please enter a valid command, type HELP for a list of available commands."),
    }

    Ok(true)
}

/// Print search results and perform the single-shot ordinal prompt.
///
/// Reads exactly one line; anything that does not parse to an in-range
/// number is treated as a decline, with no re-prompt.
fn run_search(
    console: &mut MediaConsole,
    input: &mut impl BufRead,
    response: SearchResponse,
) -> Result<()> {
    print_outcome(&response.outcome);
    if response.hits.is_empty() {
        return Ok(());
    }

    println!("Would you like to play any of the above? If yes, specify the number of the video.");
    println!("If your answer is not a valid number, we will assume it's a no.");

    let choice = read_line(input)?.and_then(|answer| answer.parse::<usize>().ok());
    if let Some(outcome) = console.resolve_search_choice(&response.hits, choice) {
        print_outcome(&outcome);
    }
    Ok(())
}
