#[cfg(test)]
pub mod test {
    use crate::{
        buffer::buffer_cache::AccessType,
        config::SimConfig,
        process::{
            process::Process,
            workload::{WorkloadGenerator, REQUESTS_PER_PROCESS},
        },
        scheduler::request::Request,
    };

    fn snapshot(processes: &[Process]) -> Vec<Vec<Request>> {
        processes
            .iter()
            .map(|p| p.requests().copied().collect())
            .collect()
    }

    #[test]
    fn same_seed_same_workload() {
        let config = SimConfig::default();

        let first = WorkloadGenerator::new(42, &config).generate(5);
        let second = WorkloadGenerator::new(42, &config).generate(5);

        assert_eq!(snapshot(&first), snapshot(&second));
    }

    #[test]
    fn generated_processes_respect_config() {
        let config = SimConfig {
            num_tracks: 64,
            processing_time: 3.5,
            ..SimConfig::default()
        };

        let processes = WorkloadGenerator::new(1, &config).generate(8);

        assert_eq!(8, processes.len());
        for (pid, process) in processes.iter().enumerate() {
            assert_eq!(pid as u32, process.pid());
            assert_eq!(3.5, process.processing_time());
            assert!(REQUESTS_PER_PROCESS.contains(&process.pending_len()));
            assert!(process.requests().all(|r| r.track < 64));
        }
    }

    #[test]
    fn write_probability_bounds() {
        let config = SimConfig::default();

        let reads = WorkloadGenerator::new(3, &config)
            .write_probability(0.0)
            .generate(4);
        assert!(reads
            .iter()
            .flat_map(|p| p.requests())
            .all(|r| r.access == AccessType::Read));

        let writes = WorkloadGenerator::new(3, &config)
            .write_probability(1.0)
            .generate(4);
        assert!(writes
            .iter()
            .flat_map(|p| p.requests())
            .all(|r| r.access == AccessType::Write));
    }

    #[test]
    fn next_request_consumes_front_to_back() {
        let mut process = Process::new(0, vec![Request::read(4), Request::write(2)], 7.0);

        assert!(process.has_pending());
        assert_eq!(Some(Request::read(4)), process.next_request());
        assert_eq!(Some(Request::write(2)), process.next_request());
        assert_eq!(None, process.next_request());
        assert!(!process.has_pending());
    }

    #[test]
    fn fixed_request_count() {
        let config = SimConfig::default();
        let processes = WorkloadGenerator::new(9, &config)
            .requests_per_process(3..=3)
            .generate(2);

        assert!(processes.iter().all(|p| p.pending_len() == 3));
    }
}
