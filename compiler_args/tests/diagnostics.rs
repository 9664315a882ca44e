//! Diagnostic sinks and the multi-line argument rendering.

mod common;

use std::cell::RefCell;

use anyhow::{Result, ensure};
use compiler_args::{ArgumentSerializer, Arguments, NoopSink, TracingSink};
use rstest::rstest;

use common::{SAMPLE_TOKENS, sample};

#[rstest]
fn closure_sink_receives_the_returned_arguments() -> Result<()> {
    let seen = RefCell::new(Vec::new());
    let serializer =
        ArgumentSerializer::new().with_sink(|args: &Arguments| seen.borrow_mut().push(args.clone()));
    let config = sample();
    let args = serializer.arguments(Some(&config))?;
    let recorded = seen.into_inner();
    ensure!(recorded.len() == 1, "sink called {} times", recorded.len());
    ensure!(recorded.first() == Some(&args));
    Ok(())
}

#[rstest]
fn sink_sees_empty_output_for_missing_configuration() -> Result<()> {
    let seen = RefCell::new(None);
    let serializer =
        ArgumentSerializer::new().with_sink(|args: &Arguments| *seen.borrow_mut() = Some(args.len()));
    serializer.arguments(None::<&common::ApplicationConfiguration>)?;
    ensure!(seen.into_inner() == Some(0));
    Ok(())
}

#[rstest]
fn builtin_sinks_leave_output_untouched() -> Result<()> {
    let config = sample();
    let traced = ArgumentSerializer::new()
        .with_sink(TracingSink)
        .arguments(Some(&config))?;
    let silent = ArgumentSerializer::new()
        .with_sink(NoopSink)
        .arguments(Some(&config))?;
    ensure!(traced == silent);
    ensure!(traced.as_slice() == SAMPLE_TOKENS);
    Ok(())
}

#[rstest]
fn diagnostic_puts_each_flag_on_its_own_line() -> Result<()> {
    let args = ArgumentSerializer::new()
        .with_sink(NoopSink)
        .arguments(Some(&sample()))?;
    let rendered = args.diagnostic().to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    ensure!(lines.len() == args.groups().len(), "lines: {lines:?}");
    ensure!(lines.first() == Some(&"-compiler.debug=true"));
    ensure!(lines.contains(&"-compiler.namespace http://ns.adobe.com/mxml/2009 mxml-manifest.xml"));
    ensure!(lines.contains(&"-frame two mx.core.Application app mx.managers.SystemManager"));
    ensure!(lines.last() == Some(&"-target-player=10.0.0"));
    Ok(())
}
