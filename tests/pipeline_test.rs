use netflix_eda::charts::chart_file_names;
use netflix_eda::data::LoaderError;
use netflix_eda::{pipeline, Config};
use std::fs;
use std::io;
use std::path::Path;

const SAMPLE: &str = "\
show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description
s1,Movie,Dick Johnson Is Dead,Kirsten Johnson,,United States,\"September 25, 2021\",2020,PG-13,90 min,Documentaries,A filmmaker stages his father's death.
s2,TV Show,Blood & Water,,\"Ama Qamata, Khosi Ngema, Gail Mabalane\",South Africa,\"September 24, 2021\",2021,TV-MA,2 Seasons,\"International TV Shows, TV Dramas, TV Mysteries\",Two teens suspect they are sisters.
s3,TV Show,Ganglands,Julien Leclercq,\"Sami Bouajila, Tracy Gotoas\",,\"September 24, 2021\",2021,TV-MA,1 Season,\"Crime TV Shows, International TV Shows\",A thief protects his family.
s4,Movie,My Little Pony: A New Generation,\"Robert Cullen, José Luis Ucha\",\"Vanessa Hudgens, Kimiko Glenn\",,\"September 24, 2021\",2021,PG,,Children & Family Movies,Equestria has divided.
s5,Movie,Sankofa,Haile Gerima,\"Kofi Ghanaba, Oyafunmike Ogunlano\",\"United States, Ghana\",\"September 24, 2021\",1993,TV-MA,125 min,\"Dramas, Independent Movies, International Movies\",A model is transported to a plantation.
s6,TV Show,The Great British Baking Show,Andy Devonshire,\"Mel Giedroyc, Sue Perkins\",United Kingdom,,2021,TV-14,9 Seasons,\"British TV Shows, Reality TV\",Amateur bakers compete.
s7,Movie,The Starling,Theodore Melfi,\"Melissa McCarthy, Chris O'Dowd\",United States,\"September 24, 2021\",2021,,104 min,\"Comedies, Dramas\",A woman adjusts to life after a loss.
s8,Movie,Jeans,S. Shankar,\"Prashanth, Aishwarya Rai Bachchan\",India,\" August 4, 2017\",1998,TV-14,166 min,\"Comedies, International Movies, Romantic Movies\",Twin brothers meet twin sisters.
";

fn write_sample(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("netflix_titles.csv");
    fs::write(&path, SAMPLE).unwrap();
    path
}

#[test]
fn sample_produces_exactly_the_eight_charts() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(dir.path());
    let out = dir.path().join("charts");
    let config = Config::with_paths(&input, &out);

    let written = pipeline::run(&config, &mut io::sink()).unwrap();
    assert_eq!(written.len(), 8);

    let mut produced: Vec<String> = fs::read_dir(&out)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    produced.sort();
    let mut expected: Vec<String> = chart_file_names().into_iter().map(String::from).collect();
    expected.sort();
    assert_eq!(produced, expected);

    for path in written {
        assert!(fs::metadata(&path).unwrap().len() > 0, "{} is empty", path.display());
    }
}

#[test]
fn rerun_overwrites_existing_charts() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(dir.path());
    let out = dir.path().join("charts");
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("top_genres.png"), b"stale").unwrap();

    pipeline::run(&Config::with_paths(&input, &out), &mut io::sink()).unwrap();
    let bytes = fs::read(out.join("top_genres.png")).unwrap();
    assert_ne!(bytes, b"stale");
    assert_eq!(fs::read_dir(&out).unwrap().count(), 8);
}

#[test]
fn absent_input_reports_not_found_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("charts");
    let config = Config::with_paths(dir.path().join("netflix_titles.csv"), &out);

    let mut console = Vec::new();
    let err = pipeline::run(&config, &mut console).unwrap_err();
    assert!(console.is_empty());
    assert!(err.downcast_ref::<LoaderError>().is_some_and(LoaderError::is_not_found));
    assert_eq!(
        pipeline::failure_message(&err, &config),
        "Error: netflix_titles.csv not found. Make sure it's in the same directory as the program."
    );
    assert!(!out.exists());
}

#[test]
fn other_failures_use_the_generic_message() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("netflix_titles.csv");
    let broken = SAMPLE.replace("125 min", "two hours");
    fs::write(&input, broken).unwrap();
    let config = Config::with_paths(&input, dir.path().join("charts"));

    let err = pipeline::run(&config, &mut io::sink()).unwrap_err();
    let message = pipeline::failure_message(&err, &config);
    assert!(message.starts_with("An error occurred: "));
    assert!(message.contains("two hours"));
}

fn console_lines(console: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(console)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn console_report_follows_the_fixed_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(dir.path());
    let config = Config::with_paths(&input, dir.path().join("charts"));

    let mut console = Vec::new();
    pipeline::run(&config, &mut console).unwrap();
    let lines = console_lines(&console);

    assert_eq!(lines[0], "Dataset loaded successfully!");
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "Dataset after cleaning:");
    assert_eq!(lines[3], "First 5 rows:");

    let position = |needle: &str| {
        lines
            .iter()
            .position(|line| line == needle)
            .unwrap_or_else(|| panic!("missing line {needle:?}"))
    };
    let info = position("Dataset Information after cleaning:");
    let missing = position("Missing values after cleaning:");
    assert!(info > 3 && missing > info);
    assert_eq!(lines[info - 1], "");
    assert_eq!(lines[missing - 1], "");
    // Seven of the eight sample rows carry a date_added.
    assert_eq!(lines[info + 1], "7 entries");

    let generated: Vec<&str> = lines
        .iter()
        .filter_map(|line| line.strip_prefix("Generated: "))
        .collect();
    assert_eq!(generated, chart_file_names());
    assert!(lines.last().unwrap().starts_with("Generated: "));
    assert!(lines[..missing].iter().all(|line| !line.starts_with("Generated: ")));
}

#[test]
fn header_only_input_still_reports_and_draws() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("netflix_titles.csv");
    fs::write(&input, format!("{}\n", SAMPLE.lines().next().unwrap())).unwrap();
    let config = Config::with_paths(&input, dir.path().join("charts"));

    let mut console = Vec::new();
    let written = pipeline::run(&config, &mut console).unwrap();
    assert_eq!(written.len(), 8);

    let lines = console_lines(&console);
    assert!(lines.contains(&"0 entries".to_string()));
    assert!(lines.contains(&"Data columns (total 14 columns):".to_string()));
    assert_eq!(lines.iter().filter(|l| l.starts_with("Generated: ")).count(), 8);
}
