#![allow(missing_docs)]

use tracktag::organize::{BatchReport, organize_directory, update_directory};
use tracktag::prelude::*;

use structopt::StructOpt;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

#[derive(Debug, StructOpt)]
#[structopt(name = "tracktag", about = "Update MP3 track number tags")]
struct Opt {
	/// Track number (for a single file)
	#[structopt(short, long)]
	track: Option<u32>,

	/// Title (for a single file)
	#[structopt(long)]
	title: Option<String>,

	/// Album name (for a single file)
	#[structopt(short = "A", long)]
	album: Option<String>,

	/// Artist (for a single file)
	#[structopt(long)]
	artist: Option<String>,

	/// Read and display the existing tags of a file
	#[structopt(long)]
	read_tags: bool,

	/// Rename every file in the directory to "<track> <BOOK_ID>.mp3", and set its album
	#[structopt(long, value_name = "BOOK_ID")]
	organize: Option<String>,

	/// Minimum number of digits in renamed files
	#[structopt(long, default_value = "3")]
	pad_width: usize,

	/// Fail instead of writing an ID3v1 tag when the ID3v2 tag can't be written
	#[structopt(long)]
	no_id3v1_fallback: bool,

	/// MP3 file or directory
	#[structopt(parse(from_os_str))]
	path: PathBuf,
}

fn main() {
	env_logger::init();

	let opt = Opt::from_args();
	let write_options = WriteOptions::new().id3v1_fallback(!opt.no_id3v1_fallback);

	if opt.read_tags {
		read_tags(&opt.path);
	} else if opt.path.is_file() {
		update_single_file(&opt, write_options);
	} else if opt.path.is_dir() {
		let report = match opt.organize {
			Some(ref book_id) => {
				let options = OrganizeOptions::new()
					.pad_width(opt.pad_width)
					.write_options(write_options);
				organize_directory(&opt.path, book_id, options)
			},
			None => update_directory(&opt.path, write_options),
		};

		match report {
			Ok(report) => print_report(&report, opt.organize.is_some()),
			Err(e) => {
				eprintln!("✗ {e}");
				std::process::exit(1);
			},
		}
	} else {
		eprintln!("Error: Path not found: {}", opt.path.display());
		std::process::exit(1);
	}
}

fn read_tags(path: &Path) {
	let fields = match tracktag::read_fields(path) {
		Ok(fields) => fields,
		Err(e) => {
			eprintln!("Error: {e}");
			std::process::exit(1);
		},
	};

	if let Some(track_number) = fields.track_number {
		println!("Track: {track_number}");
	}

	if let Some(title) = fields.title {
		println!("Title: {title}");
	}

	if let Some(album) = fields.album {
		println!("Album: {album}");
	}

	if let Some(artist) = fields.artist {
		println!("Artist: {artist}");
	}
}

fn update_single_file(opt: &Opt, write_options: WriteOptions) {
	let Some(track_number) = opt.track else {
		eprintln!("Error: --track required for single file");
		std::process::exit(1);
	};

	let mut update = TagUpdate::new().track_number(track_number);
	if let Some(ref title) = opt.title {
		update = update.title(title.as_str());
	}

	if let Some(ref album) = opt.album {
		update = update.album(album.as_str());
	}

	if let Some(ref artist) = opt.artist {
		update = update.artist(artist.as_str());
	}

	match tracktag::update_file(&opt.path, &update, write_options) {
		Ok(format) => {
			if format == TagFormat::Id3v1 {
				eprintln!("WARN: Only an ID3v1 tag could be written");
			}

			let file_name = opt
				.path
				.file_name()
				.map(OsStr::to_string_lossy)
				.unwrap_or_default();
			println!("✓ Updated: {file_name} → Track #{track_number}");
		},
		Err(e) => {
			eprintln!("✗ Failed: {e}");
			std::process::exit(1);
		},
	}
}

fn print_report(report: &BatchReport, organized: bool) {
	if report.processed() == 0 {
		println!(
			"No numbered MP3 files found (looking for files starting with numbers like 1.mp3, \
			 001_title.mp3, etc.)"
		);
		return;
	}

	for outcome in report.outcomes() {
		if outcome.is_success() {
			println!("{outcome}");
		} else {
			eprintln!("{outcome}");
		}
	}

	println!();
	println!("{report}");

	if organized {
		println!(
			"Renamed {} files, updated {} tags, {} errors",
			report.renamed(),
			report.tags_updated(),
			report.errors()
		);
	}

	if !report.is_success() {
		std::process::exit(1);
	}
}
