use std::collections::BTreeMap;
use std::path::PathBuf;

use appcluster::config::ApplicationClusterConfiguration;
use appcluster::config::ConfigurationError;
use appcluster::config::EntrypointClusterConfiguration;
use appcluster::config::NotValidatedApplicationClusterConfiguration;
use appcluster::job::JobId;
use appcluster::savepoint::RestoreMode;
use appcluster::savepoint::SavepointRestoreSettings;

fn base() -> EntrypointClusterConfiguration {
    EntrypointClusterConfiguration::new(PathBuf::from("/opt/cluster/conf"), BTreeMap::new(), vec![], None, 8081)
}

fn configuration(
    job_id: Option<JobId>,
    job_class_name: Option<&str>,
    jars: Option<Vec<&str>>,
) -> Result<ApplicationClusterConfiguration, ConfigurationError> {
    ApplicationClusterConfiguration::new(
        base(),
        Some(SavepointRestoreSettings::none()),
        job_id,
        job_class_name.map(String::from),
        jars.map(|jars| jars.into_iter().map(String::from).collect()),
    )
}

#[test]
fn test_explicit_jar_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let c = configuration(None, None, Some(vec!["/a/app.jar"]))?;
    assert!(c.has_jars());
    assert_eq!(c.jars(), Some(&[String::from("/a/app.jar")][..]));
    Ok(())
}

#[test]
fn test_empty_jar_list_means_no_jars() -> Result<(), Box<dyn std::error::Error>> {
    let c = configuration(None, None, Some(vec![]))?;
    assert!(!c.has_jars());
    Ok(())
}

#[test]
fn test_job_id_only() -> Result<(), Box<dyn std::error::Error>> {
    let id: JobId = "fd72014d4c864993a2e5a9287b4a9c5d".parse()?;
    let c = configuration(Some(id), None, None)?;

    assert!(!c.has_jars());
    assert_eq!(c.job_id(), Some(id));
    assert!(c.job_class_name().is_none());
    Ok(())
}

#[test]
fn test_missing_savepoint_restore_settings_fails() {
    for (job_id, job_class_name, jars) in [
        (None, None, None),
        (Some(JobId::generate()), None, None),
        (None, Some(String::from("org.example.Job")), Some(vec![String::from("/a/app.jar")])),
        (Some(JobId::generate()), Some(String::from("org.example.Job")), Some(vec![])),
    ] {
        let e = ApplicationClusterConfiguration::new(base(), None, job_id, job_class_name, jars).unwrap_err();
        assert!(matches!(
            e,
            ConfigurationError::MissingRequiredField { field: "savepoint_restore_settings" }
        ));
    }
}

#[test]
fn test_job_id_and_class_name_are_independent() -> Result<(), Box<dyn std::error::Error>> {
    let id = JobId::generate();

    let c = configuration(None, None, None)?;
    assert!(c.job_id().is_none());
    assert!(c.job_class_name().is_none());

    let c = configuration(Some(id), None, None)?;
    assert_eq!(c.job_id(), Some(id));
    assert!(c.job_class_name().is_none());

    let c = configuration(None, Some("org.example.Job"), None)?;
    assert!(c.job_id().is_none());
    assert_eq!(c.job_class_name(), Some("org.example.Job"));

    let c = configuration(Some(id), Some("org.example.Job"), Some(vec!["/a/app.jar"]))?;
    assert_eq!(c.job_id(), Some(id));
    assert_eq!(c.job_class_name(), Some("org.example.Job"));
    assert!(c.has_jars());
    Ok(())
}

#[test]
fn test_builder_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let mut props = BTreeMap::new();
    props.insert(String::from("taskmanager.numberOfTaskSlots"), String::from("2"));
    let settings = SavepointRestoreSettings::for_path_with_mode("/savepoints/sp-7", true, RestoreMode::Claim);
    let id = JobId::from_parts(1, 2);

    let c = NotValidatedApplicationClusterConfiguration::builder()
        .config_dir("/opt/cluster/conf")
        .dynamic_properties(props.clone())
        .args(vec![String::from("--input"), String::from("/data")])
        .hostname("jobmanager-0")
        .rest_port(9091)
        .savepoint_restore_settings(settings.clone())
        .job_id(id)
        .job_class_name("org.example.WordCount")
        .jars(vec![String::from("/a/app.jar"), String::from("/a/dep.jar")])
        .build()
        .validate()?;

    assert_eq!(c.config_dir(), &PathBuf::from("/opt/cluster/conf"));
    assert_eq!(c.dynamic_properties(), &props);
    assert_eq!(c.args(), &vec![String::from("--input"), String::from("/data")]);
    assert_eq!(c.hostname().as_deref(), Some("jobmanager-0"));
    assert_eq!(c.rest_port(), 9091);
    assert_eq!(c.rest_port_override(), Some(9091));
    assert_eq!(c.savepoint_restore_settings(), &settings);
    assert_eq!(c.job_id(), Some(id));
    assert_eq!(c.job_class_name(), Some("org.example.WordCount"));
    assert_eq!(c.jars(), Some(&[String::from("/a/app.jar"), String::from("/a/dep.jar")][..]));
    assert!(c.has_jars());
    Ok(())
}

#[test]
fn test_savepoint_settings_from_dynamic_properties() -> Result<(), Box<dyn std::error::Error>> {
    let settings = SavepointRestoreSettings::for_path("/savepoints/sp-8", false);

    let c = NotValidatedApplicationClusterConfiguration::builder()
        .config_dir("/opt/cluster/conf")
        .dynamic_properties(settings.to_properties())
        .args(vec![])
        .savepoint_restore_settings(settings.clone())
        .build()
        .validate()?;

    assert_eq!(SavepointRestoreSettings::from_properties(c.dynamic_properties())?, settings);
    Ok(())
}
