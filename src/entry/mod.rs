use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::error;

use loadr::app::run_local;
use loadr::args::LoadArgs;
use loadr::config::{apply_config, load_config};
use loadr::error::AppResult;

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;

    crate::system::logger::init_logging(args.verbose, args.no_color);

    if let Err(err) = merge_config(&mut args, &matches) {
        error!("{}", err);
        return Err(err);
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    crate::system::banner::print_cli_banner(args.no_color);
    match runtime.block_on(run_local(&args)) {
        Ok(_outcome) => Ok(()),
        Err(err) => {
            error!("{}", err);
            Err(err)
        }
    }
}

fn parse_args() -> AppResult<(LoadArgs, ArgMatches)> {
    let matches = LoadArgs::command().get_matches();
    let args = LoadArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

fn merge_config(args: &mut LoadArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(args, matches, config);
    }
    Ok(())
}
