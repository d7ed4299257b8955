use clap::*;

use trs_blend::core::prelude::*;

use serde::Serialize;
use std::env;
use std::path::PathBuf;
use std::process;

use log::*;

#[derive(Debug, Parser)]
#[clap(about, version)]
struct CommandOptions {
    /// Request file (JSON) holding matrices A and B, time and flags.
    #[arg(short, long, value_name = "filename")]
    pub infile: Option<PathBuf>,

    /// Generate random A and B from the given seed instead of reading a file.
    #[arg(long, value_name = "seed", conflicts_with = "infile")]
    pub random: Option<u64>,

    /// Write the effective request to the given file.
    #[arg(long, value_name = "filename")]
    pub save: Option<PathBuf>,

    /// Interpolation time in [0, 1].
    #[arg(short, long, value_name = "t")]
    pub time: Option<Float>,

    /// Interpolate translation.
    #[arg(long, default_value = "false")]
    pub translation: bool,

    /// Interpolate rotation.
    #[arg(long, default_value = "false")]
    pub rotation: bool,

    /// Interpolate scale.
    #[arg(long, default_value = "false")]
    pub scale: bool,

    /// Interpolate every component.
    #[arg(short, long, default_value = "false")]
    pub all: bool,

    /// Evaluate num + 1 evenly spaced times from 0 to 1.
    #[arg(short, long, value_name = "num")]
    pub steps: Option<usize>,

    /// Also print the twelve cube edges of the result.
    #[arg(short, long, default_value = "false")]
    pub edges: bool,

    /// Print results as JSON.
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Suppress all text output other than error messages.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,

    /// Log messages at or above this level (0 -> INFO,
    /// 1 -> WARNING, 2 -> ERROR, 3-> FATAL).
    #[arg(long, value_name = "num")]
    pub minloglevel: Option<i32>,
}

#[derive(Debug, Serialize)]
struct Report {
    pub time: Float,
    pub flags: InterpolationFlags,
    pub matrix: Matrix4x4,
    pub translation: Vector3f,
    pub rotation: Quaternion,
    pub scale: Vector3f,
    pub determinant: Float,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edges: Option<Vec<Edge>>,
}

impl Report {
    fn new(req: &InterpolationRequest, matrix: &Matrix4x4, with_edges: bool) -> Self {
        let (t, q, s) = decompose(matrix);
        let edges = if with_edges {
            Some(cube_edges(matrix).to_vec())
        } else {
            None
        };
        Report {
            time: req.time,
            flags: req.flags,
            matrix: *matrix,
            translation: t,
            rotation: q,
            scale: s,
            determinant: determinant(matrix),
            edges,
        }
    }
}

/// One report per frame of a sweep.
fn sweep_reports(session: &InterpolationSession, frames: &[Frame], with_edges: bool) -> Vec<Report> {
    frames
        .iter()
        .map(|f| Report::new(&session.request(f.time), &f.matrix, with_edges))
        .collect()
}

fn init_logger(opts: &CommandOptions) {
    if let Some(minloglevel) = opts.minloglevel {
        const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
        let log_level = LOG_LEVELS[(minloglevel + 2).clamp(0, 4) as usize];
        env::set_var("RUST_LOG", log_level);
    } else {
        //default log level : warn
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_owned());
        env::set_var("RUST_LOG", log_level);
    }

    env_logger::Builder::from_default_env()
        .format_target(false)
        .format_module_path(false)
        .init();
}

fn build_request(opts: &CommandOptions) -> Result<InterpolationRequest, TransformError> {
    let mut req = if let Some(path) = opts.infile.as_ref() {
        load_request(path)?
    } else if let Some(seed) = opts.random {
        let mut rng = RNG::new_sequence(seed);
        let a = random_affine(&mut rng);
        let b = random_affine(&mut rng);
        InterpolationRequest::new(&a, &b, 0.0, &InterpolationFlags::none())
    } else {
        InterpolationRequest::default()
    };

    if let Some(time) = opts.time {
        req.time = time;
    }
    req.flags.translation |= opts.translation || opts.all;
    req.flags.rotation |= opts.rotation || opts.all;
    req.flags.scale |= opts.scale || opts.all;
    return Ok(req);
}

fn print_matrix(name: &str, m: &Matrix4x4) {
    println!("{}:", name);
    for row in 0..4 {
        println!(
            "  {:>12.6} {:>12.6} {:>12.6} {:>12.6}",
            m.get(row, 0),
            m.get(row, 1),
            m.get(row, 2),
            m.get(row, 3)
        );
    }
}

fn print_report(report: &Report) {
    let t = &report.translation;
    let q = &report.rotation;
    let s = &report.scale;
    println!("time: {}  flags: {:?}", report.time, report.flags);
    print_matrix("Matrix C", &report.matrix);
    println!("translation: ({:.6}, {:.6}, {:.6})", t.x, t.y, t.z);
    println!(
        "rotation:    (w {:.6}, x {:.6}, y {:.6}, z {:.6})",
        q.w, q.x, q.y, q.z
    );
    println!("scale:       ({:.6}, {:.6}, {:.6})", s.x, s.y, s.z);
    println!("determinant: {:.6}", report.determinant);
    if let Some(edges) = report.edges.as_ref() {
        for e in edges.iter() {
            println!(
                "  {:?}: ({:.4}, {:.4}, {:.4}) -> ({:.4}, {:.4}, {:.4})",
                e.axis, e.from.x, e.from.y, e.from.z, e.to.x, e.to.y, e.to.z
            );
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), TransformError> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{}", s);
    return Ok(());
}

fn run(opts: &CommandOptions) -> Result<(), TransformError> {
    let req = build_request(opts)?;
    if let Err(e) = req.validate() {
        warn!("{}", e.msg);
    }
    if let Some(path) = opts.save.as_ref() {
        save_request(path, &req)?;
        info!("Saved request to {}.", path.display());
    }

    if opts.quiet {
        return Ok(());
    }

    if let Some(steps) = opts.steps {
        let session = InterpolationSession::from(&req);
        let frames = session.sweep(steps);
        let reports = sweep_reports(&session, &frames, opts.edges);
        if opts.json {
            print_json(&reports)?;
        } else {
            for r in reports.iter() {
                print_report(r);
                println!();
            }
        }
    } else {
        let m = req.interpolate();
        let report = Report::new(&req, &m, opts.edges);
        if opts.json {
            print_json(&report)?;
        } else {
            print_matrix("Matrix A", &req.a);
            print_matrix("Matrix B", &req.b);
            print_report(&report);
        }
    }
    return Ok(());
}

pub fn main() {
    let opts = CommandOptions::parse();
    init_logger(&opts);

    match run(&opts) {
        Ok(()) => process::exit(0),
        Err(e) => {
            error!("{}", e.msg);
            process::exit(-1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let a = Matrix4x4::identity();
        let b = Matrix4x4::translate(2.0, 0.0, 0.0) * Matrix4x4::rotate_z(30.0);
        let session = InterpolationSession::new(&a, &b, &InterpolationFlags::all());
        let frames = session.sweep(2);

        let reports = sweep_reports(&session, &frames, true);
        assert_eq!(reports.len(), 3);
        for (r, f) in reports.iter().zip(frames.iter()) {
            assert_eq!(r.time, f.time);
            assert_eq!(r.matrix, f.matrix);
            assert_eq!(r.edges.as_ref().map(|e| e.len()), Some(12));
        }
        let s = serde_json::to_string(&reports).unwrap();
        assert!(s.contains("\"edges\""));

        let reports = sweep_reports(&session, &frames, false);
        assert!(reports.iter().all(|r| r.edges.is_none()));
        let s = serde_json::to_string(&reports).unwrap();
        assert!(!s.contains("\"edges\""));
    }
}
