use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDate, NaiveDateTime, Utc};

use crate::cli::{AddArgs, Cli, Commands, MonthlyArgs, WeeklyArgs, resolve_command};
use crate::core::{
    ClockTime, Session, SessionDraft, TimelineInterval, View, ViewState, aggregate_month,
    aggregate_week, build_timeline, sessions_on, sorted_by_start,
};
use crate::error::AppError;
use crate::output::{
    TableOptions, output_heatmap_json, output_timeline_json, output_weekly_json, print_heatmap,
    print_timeline, print_weekly_table,
};
use crate::store::{SessionRepository, export_file_name, export_json, open_store, parse_import};
use crate::utils::{format_date, parse_date, parse_month};

pub(crate) struct CommandContext {
    pub(crate) json: bool,
    pub(crate) today: NaiveDate,
    pub(crate) now: NaiveDateTime,
    pub(crate) opts: TableOptions,
}

fn parse_optional_date(value: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    value.map(parse_date).transpose().map_err(AppError::from)
}

/// Timeline of one day in start order
fn day_timeline(sessions: &[Session], date: NaiveDate) -> Vec<TimelineInterval> {
    sorted_by_start(build_timeline(&sessions_on(sessions, date)))
}

fn render_weekly(
    sessions: &[Session],
    state: &ViewState,
    ctx: &CommandContext,
) -> Result<(), AppError> {
    log::debug!(
        "{:?} view: window ends {}, selected {}",
        state.current_view,
        state.window_end_date,
        state.selected_date
    );
    let week = aggregate_week(sessions, state.window_end_date, state.selected_date);
    let timeline = day_timeline(sessions, state.selected_date);
    if ctx.json {
        println!("{}", output_weekly_json(&week, &timeline)?);
    } else {
        print_weekly_table(&week, ctx.opts);
        print_timeline(state.selected_date, &timeline, ctx.opts);
    }
    Ok(())
}

fn handle_weekly(
    args: &WeeklyArgs,
    repo: &SessionRepository,
    state: &mut ViewState,
    ctx: &CommandContext,
) -> Result<(), AppError> {
    let target = parse_optional_date(args.date.as_deref())?;
    state.show_view(View::Weekly, target);
    if let Some(end) = parse_optional_date(args.end.as_deref())? {
        state.window_end_date = end;
    }
    state.shift_window(args.shift);
    render_weekly(repo.list(), state, ctx)
}

fn handle_monthly(
    args: &MonthlyArgs,
    repo: &SessionRepository,
    state: &mut ViewState,
    ctx: &CommandContext,
) -> Result<(), AppError> {
    state.show_view(View::Monthly, None);
    if let Some(month) = args.month.as_deref() {
        let (year, month0) = parse_month(month)?;
        state.set_month(year, month0);
    }
    state.change_month(args.shift);

    let heatmap = aggregate_month(
        repo.list(),
        state.current_month,
        state.current_year,
        ctx.today,
    );
    if ctx.json {
        println!("{}", output_heatmap_json(&heatmap)?);
    } else {
        print_heatmap(&heatmap, ctx.opts);
    }
    Ok(())
}

fn handle_timeline(
    date: Option<&str>,
    repo: &SessionRepository,
    state: &mut ViewState,
    ctx: &CommandContext,
) -> Result<(), AppError> {
    if let Some(date) = parse_optional_date(date)? {
        state.select_date(date);
    }
    let timeline = day_timeline(repo.list(), state.selected_date);
    if ctx.json {
        println!("{}", output_timeline_json(state.selected_date, &timeline)?);
    } else {
        print_timeline(state.selected_date, &timeline, ctx.opts);
    }
    Ok(())
}

/// Build the session the add form would produce from the given flags
fn draft_from_args(args: &AddArgs, now: NaiveDateTime) -> Result<SessionDraft, AppError> {
    let mut draft = SessionDraft::prefill(now);
    let ends_now = draft.end_time();

    if let Some(date) = parse_optional_date(args.date.as_deref())? {
        draft.date = date;
    }
    draft.duration_min = args.duration;
    draft.quality = args.quality;

    if let Some(start) = args.start.as_deref() {
        draft.start = start.parse::<ClockTime>()?;
    } else {
        let end = match args.end.as_deref() {
            Some(end) => end.parse::<ClockTime>()?,
            None => ends_now,
        };
        draft = draft.with_end(end);
    }
    Ok(draft)
}

fn handle_add(
    args: &AddArgs,
    repo: &mut SessionRepository,
    state: &mut ViewState,
    ctx: &CommandContext,
) -> Result<(), AppError> {
    state.show_view(View::Add, None);
    let draft = draft_from_args(args, ctx.now)?;
    let session = draft.into_session(repo.next_id(Utc::now().timestamp_millis())?);
    log::debug!("{:?} view: adding {session:?}", state.current_view);

    let summary = format!(
        "Added {}-minute session on {} at {}",
        session.duration_min,
        format_date(session.date),
        session.start_time
    );
    repo.add(session)?;
    if !ctx.json {
        println!("{summary}");
    }

    state.show_view(View::Weekly, None);
    render_weekly(repo.list(), state, ctx)
}

fn handle_export(
    output: Option<&str>,
    repo: &SessionRepository,
    ctx: &CommandContext,
) -> Result<(), AppError> {
    let content = export_json(repo.list())?;
    match output {
        Some("-") => println!("{content}"),
        _ => {
            let path = output
                .map(str::to_string)
                .unwrap_or_else(|| export_file_name(ctx.today));
            fs::write(&path, content).map_err(|source| AppError::Io {
                path: path.clone(),
                source,
            })?;
            println!("Exported {} sessions to {path}", repo.list().len());
        }
    }
    Ok(())
}

fn handle_import(
    file: &Path,
    repo: &mut SessionRepository,
    state: &mut ViewState,
    ctx: &CommandContext,
) -> Result<(), AppError> {
    let content = fs::read_to_string(file).map_err(|source| AppError::Io {
        path: file.display().to_string(),
        source,
    })?;
    let sessions = parse_import(&content)?;
    let count = sessions.len();
    repo.replace_all(sessions)?;

    if !ctx.json {
        println!("Imported {count} sessions from {}", file.display());
    }
    state.show_view(View::Weekly, None);
    render_weekly(repo.list(), state, ctx)
}

/// Resolve "today", open the session store and run the requested command
pub(crate) fn run(mut cli: Cli) -> Result<(), AppError> {
    let local_now = Local::now().naive_local();
    let today = match cli.today.as_deref() {
        Some(value) => parse_date(value)?,
        None => local_now.date(),
    };
    let ctx = CommandContext {
        json: cli.json,
        today,
        now: today.and_time(local_now.time()),
        opts: TableOptions {
            order: cli.order,
            use_color: cli.use_color(),
        },
    };

    let data_path = cli.data_path();
    let store = open_store(cli.backend(), &data_path)?;
    let mut repo = SessionRepository::open(store)?;
    let mut state = ViewState::new(today);

    match resolve_command(cli.command.take()) {
        Commands::Weekly(args) => handle_weekly(&args, &repo, &mut state, &ctx),
        Commands::Monthly(args) => handle_monthly(&args, &repo, &mut state, &ctx),
        Commands::Timeline { date } => handle_timeline(date.as_deref(), &repo, &mut state, &ctx),
        Commands::Add(args) => handle_add(&args, &mut repo, &mut state, &ctx),
        Commands::Export { output } => handle_export(output.as_deref(), &repo, &ctx),
        Commands::Import { file } => handle_import(&file, &mut repo, &mut state, &ctx),
    }
}
