use super::*;
use msg_loader::parse_msg_string;
use msg_types::MsgSpec;

#[cfg(test)]
mod port_gen_tests {
    use super::*;

    fn state_spec() -> MsgSpec {
        let text = "\
Header header
geometry_msgs/Wrench force    # subsystem_buffer{type:container;includes:<geometry_msgs/typekit/Types.h>}
uint32 status    # subsystem_buffer{type:port;data_type:std_msgs/UInt32;validity:status_valid}
bool status_valid
float64 pressure    # subsystem_buffer{type:port;data_type:std_msgs/Float64}
";
        parse_msg_string("my_msgs", "State", text).unwrap()
    }

    fn generate<F, T>(spec: &MsgSpec, emit: F) -> T
    where
        F: FnOnce(&PortCodeGenerator) -> T,
    {
        let index = PortIndex::from_spec(spec);
        let generator = PortCodeGenerator::new(spec, &index);
        emit(&generator)
    }

    #[test]
    fn member_declarations() {
        let spec = state_spec();
        let input = generate(&spec, |g| g.input_port_members()).unwrap();
        assert_eq!(
            input,
            vec![
                "   ::geometry_msgs::Wrench_InputPorts force_;",
                "  RTT::InputPort<Container_::_status_type > status_;",
                "  RTT::InputPort<Container_::_pressure_type > pressure_;",
            ]
        );

        let output = generate(&spec, |g| g.output_port_members()).unwrap();
        assert_eq!(
            output,
            vec![
                "   ::geometry_msgs::Wrench_OutputPorts force_;",
                "  RTT::OutputPort<Container_::_status_type > status_;",
                "  RTT::OutputPort<Container_::_pressure_type > pressure_;",
            ]
        );
    }

    #[test]
    fn container_on_builtin_field_is_fatal() {
        let text = "uint32 count    # subsystem_buffer{type:container}\n";
        let spec = parse_msg_string("my_msgs", "Bad", text).unwrap();
        let index = PortIndex::from_spec(&spec);
        let generator = PortCodeGenerator::new(&spec, &index);

        let err = generator.input_port_members().unwrap_err();
        assert!(matches!(err, GenError::ContainerOnBuiltin { ref field } if field == "count"));
    }

    #[test]
    fn initializer_list_threads_task_context_for_containers() {
        let spec = state_spec();
        let lines = generate(&spec, |g| g.ports_initializer_list());
        assert_eq!(
            lines,
            vec![
                "    : force_(tc, prefix + std::string(prefix.empty()?\"\":\"_\") + \"force\")",
                "    , status_(prefix + std::string(prefix.empty()?\"\":\"_\") + \"status\")",
                "    , pressure_(prefix + std::string(prefix.empty()?\"\":\"_\") + \"pressure\")",
            ]
        );
    }

    #[test]
    fn only_single_value_ports_are_registered() {
        let spec = state_spec();
        let lines = generate(&spec, |g| g.ports_constructor_code());
        assert_eq!(
            lines,
            vec!["tc.addPort(status_);", "tc.addPort(pressure_);"]
        );
    }

    #[test]
    fn reads_land_in_validity_companion_or_fold_into_result() {
        let spec = state_spec();
        let lines = generate(&spec, |g| g.read_ports());
        assert_eq!(
            lines,
            vec![
                "result &= force_.read(ros.force);",
                "ros.status_valid = status_.read(ros.status);",
                "result &= pressure_.read(ros.pressure);",
            ]
        );
    }

    #[test]
    fn writes_are_guarded_only_with_companion() {
        let spec = state_spec();
        let lines = generate(&spec, |g| g.write_ports());
        assert_eq!(
            lines,
            vec![
                "force_.write(ros.force);",
                "if (ros.status_valid) {",
                "    status_.write(ros.status);",
                "}",
                "pressure_.write(ros.pressure);",
            ]
        );
    }

    #[test]
    fn inbound_conversion_copies_companion_into_internal_flag() {
        let spec = state_spec();
        let lines = generate(&spec, |g| g.convert_from_ros());
        assert_eq!(
            lines,
            vec![
                "  force_.convertFromROS(ros.force);",
                "  status_.convertFromROS(ros.status);",
                "  status_valid_ = ros.status_valid;",
                "  pressure_.convertFromROS(ros.pressure);",
            ]
        );
    }

    #[test]
    fn outbound_conversion_resets_when_unguarded_field_is_invalid() {
        let spec = state_spec();
        let lines = generate(&spec, |g| g.convert_to_ros()).unwrap();

        // combined guard over the companion-less fields, declaration order
        assert_eq!(lines[0], "  if ( !force_valid_");
        assert_eq!(lines[1], "  || !pressure_valid_");
        assert_eq!(lines[2], ") {");
        assert_eq!(lines[3], "  ros = Container_();");
        assert_eq!(lines[4], "}");
        assert_eq!(lines[5], "else {");
        assert_eq!(*lines.last().unwrap(), "}");

        // per-field convert-or-default bodies
        assert!(lines.contains(&"  if (status_valid_) {".to_string()));
        assert!(lines.contains(&"    status_.convertToROS(ros.status);".to_string()));
        assert!(lines.contains(&"    ros.status = uint32_t(0);".to_string()));
        assert!(lines.contains(&"    ros.force =  ::geometry_msgs::Wrench ();".to_string()));
        // companion propagation
        assert!(lines.contains(&"  ros.status_valid = status_valid_;".to_string()));
    }

    #[test]
    fn outbound_conversion_omits_reset_when_every_field_is_guarded() {
        let text = "\
uint32 status    # subsystem_buffer{type:port;data_type:std_msgs/UInt32;validity:status_valid}
bool status_valid
";
        let spec = parse_msg_string("my_msgs", "Guarded", text).unwrap();
        let lines = generate(&spec, |g| g.convert_to_ros()).unwrap();

        assert!(!lines.iter().any(|l| l.contains("ros = Container_();")));
        assert_eq!(lines[0], "  if (status_valid_) {");
    }

    #[test]
    fn includes_come_from_containers_and_deduplicate() {
        let text = "\
geometry_msgs/Wrench force    # subsystem_buffer{type:container;includes:<geometry_msgs/typekit/Types.h>, \"local.h\"}
geometry_msgs/Twist twist    # subsystem_buffer{type:container;includes:<geometry_msgs/typekit/Types.h>}
uint32 status    # subsystem_buffer{type:port;data_type:std_msgs/UInt32;includes:<ignored.h>}
";
        let spec = parse_msg_string("my_msgs", "Inc", text).unwrap();
        let lines = generate(&spec, |g| g.additional_includes());
        assert_eq!(
            lines,
            vec![
                "#include <geometry_msgs/typekit/Types.h>",
                "#include \"local.h\"",
            ]
        );
    }

    #[test]
    fn unannotated_schema_emits_nothing() {
        let spec = parse_msg_string("my_msgs", "Plain", "uint32 a\nfloat64 b\n").unwrap();
        let index = PortIndex::from_spec(&spec);
        let generator = PortCodeGenerator::new(&spec, &index);

        assert!(index.is_empty());
        assert!(generator.additional_includes().is_empty());
        assert!(generator.input_port_members().unwrap().is_empty());
        assert!(generator.ports_initializer_list().is_empty());
        assert!(generator.ports_constructor_code().is_empty());
        assert!(generator.read_ports().is_empty());
        assert!(generator.write_ports().is_empty());
        assert!(generator.convert_from_ros().is_empty());
        assert!(generator.convert_to_ros().unwrap().is_empty());
    }
}
