//! Models generated from the Kubernetes OpenAPI spec (`batch/v1`).

use gybe_model::resource;

use crate::api::core::v1::PodTemplateSpec;
use crate::meta::v1::{LabelSelector, ObjectMeta};

resource! {
    /// Job represents the configuration of a single job.
    pub struct Job => "batch/v1", "Job" {
        required {}
        optional {
            metadata: ObjectMeta => "metadata",
            spec: JobSpec => "spec",
        }
    }
}

resource! {
    /// JobSpec describes how the job execution will look like.
    pub struct JobSpec {
        required {
            /// Describes the pod that will be created when executing a job. The only allowed
            /// restart policies are `Never` or `OnFailure`.
            template: PodTemplateSpec => "template",
        }
        optional {
            active_deadline_seconds: i64 => "activeDeadlineSeconds",
            backoff_limit: i32 => "backoffLimit",
            completions: i32 => "completions",
            parallelism: i32 => "parallelism",
            selector: LabelSelector => "selector",
            ttl_seconds_after_finished: i32 => "ttlSecondsAfterFinished",
        }
    }
}

resource! {
    /// CronJob represents the configuration of a single cron job.
    pub struct CronJob => "batch/v1", "CronJob" {
        required {}
        optional {
            metadata: ObjectMeta => "metadata",
            spec: CronJobSpec => "spec",
        }
    }
}

resource! {
    /// CronJobSpec describes how the job execution will look like and when it will actually run.
    pub struct CronJobSpec {
        required {
            job_template: JobTemplateSpec => "jobTemplate",
            /// The schedule in Cron format.
            schedule: String => "schedule",
        }
        optional {
            concurrency_policy: String => "concurrencyPolicy",
            failed_jobs_history_limit: i32 => "failedJobsHistoryLimit",
            successful_jobs_history_limit: i32 => "successfulJobsHistoryLimit",
            suspend: bool => "suspend",
            time_zone: String => "timeZone",
        }
    }
}

resource! {
    /// JobTemplateSpec describes the data a Job should have when created from a template.
    pub struct JobTemplateSpec {
        required {}
        optional {
            metadata: ObjectMeta => "metadata",
            spec: JobSpec => "spec",
        }
    }
}
